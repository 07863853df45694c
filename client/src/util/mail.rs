//! Purchase e-mail drafts and `mailto:` links.

#[cfg(test)]
#[path = "mail_test.rs"]
mod mail_test;

use crate::net::types::PurchaseRequest;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Draft addressed to the request's vendor.
    #[must_use]
    pub fn for_purchase(request: &PurchaseRequest) -> Self {
        let vendor = request.vendor.as_deref().unwrap_or("vendor");
        let mut body = format!("Hello {vendor},\n\nWe would like to order the following item.\n\n");
        body.push_str(&format!("- Item: {}\n", request.item));
        if let Some(quantity) = request.quantity {
            body.push_str(&format!("- Quantity: {quantity}\n"));
        }
        if let Some(amount) = request.amount {
            body.push_str(&format!("- Amount: {amount:.0}\n"));
        }
        body.push_str(&format!("- Request no.: {}\n\nThank you.", request.id));

        Self {
            to: request.vendor_email.clone().unwrap_or_default(),
            subject: format!("[Purchase #{}] {}", request.id, request.item),
            body,
        }
    }

    #[must_use]
    pub fn is_sendable(&self) -> bool {
        self.to.contains('@') && !self.subject.trim().is_empty()
    }

    /// `mailto:` URL opening the user's mail client with this draft.
    #[must_use]
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            encode_component(self.to.trim()),
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

/// Percent-encode a URI component; only unreserved ASCII passes through.
fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
