//! Post-purchase widget markup.
//!
//! Renders the element the loader script reads the purchase report from,
//! followed by one of two fixed inline loader scripts. The script bodies are
//! constants supplied by the referral service; only the element attributes
//! carry data. At the browser the script fetches
//! `go.referralcandy.com/purchase/<appId>.js` with a query string derived
//! from the attributes.

use super::purchase::PurchasePayload;
use super::settings::IntegrationSettings;

/// Loader for popup ("popsicle") mode.
const POPSICLE_SCRIPT: &str = r#"<script>(function(e){var t,n,r,i,s,o,u,a,f,l,c,h,p,d,v;z="script";l="refcandy-purchase-js";c="refcandy-popsicle";p="go.referralcandy.com/purchase/";t="data-app-id";r={email:"a",fname:"b",lname:"c",amount:"d",currency:"e","accepts-marketing":"f",timestamp:"g","referral-code":"h",locale:"i","external-reference-id":"k",signature:"ab"};i=e.getElementsByTagName(z)[0];s=function(e,t){if(t){return""+e+"="+encodeURIComponent(t)}else{return""}};d=function(e){return""+p+h.getAttribute(t)+".js?lightbox=1&aa=75&"};if(!e.getElementById(l)){h=e.getElementById(c);if(h){o=e.createElement(z);o.id=l;a=function(){var e;e=[];for(n in r){u=r[n];v=h.getAttribute("data-"+n);e.push(s(u,v))}return e}();o.src="//"+d(h.getAttribute(t))+a.join("&");return i.parentNode.insertBefore(o,i)}}})(document);</script>"#;

/// Loader for embedded ("mint") mode.
const MINT_SCRIPT: &str = r#"<script>(function(e){var t,n,r,i,s,o,u,a,f,l,c,h,p,d,v;z="script";l="refcandy-purchase-js";c="refcandy-mint";p="go.referralcandy.com/purchase/";t="data-app-id";r={email:"a",fname:"b",lname:"c",amount:"d",currency:"e","accepts-marketing":"f",timestamp:"g","referral-code":"h",locale:"i","external-reference-id":"k",signature:"ab"};i=e.getElementsByTagName(z)[0];s=function(e,t){if(t){return""+e+"="+t}else{return""}};d=function(e){return""+p+h.getAttribute(t)+".js?aa=75&"};if(!e.getElementById(l)){h=e.getElementById(c);if(h){o=e.createElement(z);o.id=l;a=function(){var e;e=[];for(n in r){u=r[n];v=h.getAttribute("data-"+n);e.push(s(u,v))}return e}();o.src=""+e.location.protocol+"//"+d(h.getAttribute(t))+a.join("&");return i.parentNode.insertBefore(o,i)}}})(document);</script>"#;

/// Works around a layout conflict between the popup and some storefront
/// themes.
const QUICKFIX_STYLE: &str = "<style>html { position: relative !important; }</style>";

/// Render the full widget markup for one confirmation-page view.
///
/// Output order: payload element, loader script, then the quickfix style
/// when both popup and quickfix are enabled. Written to the page stream
/// verbatim by the host.
pub fn render_widget(payload: &PurchasePayload, settings: &IntegrationSettings) -> String {
    let element = payload_element(payload);
    let script = if settings.popup {
        POPSICLE_SCRIPT
    } else {
        MINT_SCRIPT
    };
    let quickfix = if settings.popup && settings.popup_quickfix {
        QUICKFIX_STYLE
    } else {
        ""
    };

    format!("{}{}{}", element, script, quickfix)
}

/// The `<div>` carrying the report as data attributes.
fn payload_element(payload: &PurchasePayload) -> String {
    let attributes = [
        ("id", payload.element_id.to_string()),
        ("data-app-id", payload.app_id.clone()),
        ("data-fname", payload.first_name.clone()),
        ("data-lname", payload.last_name.clone()),
        ("data-email", payload.email.clone()),
        ("data-amount", payload.amount.clone()),
        ("data-currency", payload.currency.clone()),
        ("data-timestamp", payload.timestamp.to_string()),
        (
            "data-external-reference-id",
            payload.external_reference_id.clone(),
        ),
        ("data-signature", payload.signature.clone()),
    ];

    let rendered: Vec<String> = attributes
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", name, escape_attribute(value)))
        .collect();

    format!("<div {}></div>", rendered.join(" "))
}

/// Escape a string for use inside a double-quoted HTML attribute.
fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
