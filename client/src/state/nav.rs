//! Navigation tabs of the dashboard layout.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Top-level sections shown in the navigation layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Employee,
    PurchaseApproval,
    Vendor,
}

impl NavTab {
    pub const ALL: [Self; 3] = [Self::Employee, Self::PurchaseApproval, Self::Vendor];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employees",
            Self::PurchaseApproval => "Purchase Approval",
            Self::Vendor => "Vendors",
        }
    }

    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Employee => "/employee",
            Self::PurchaseApproval => "/purchase/approve",
            Self::Vendor => "/vendor",
        }
    }

    /// Tab owning `path`; the e-mail composer belongs to purchase approval.
    #[must_use]
    pub fn for_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "/employee" => Some(Self::Employee),
            "/purchase/approve" => Some(Self::PurchaseApproval),
            "/vendor" => Some(Self::Vendor),
            _ if path.starts_with("/purchase/email/") => Some(Self::PurchaseApproval),
            _ => None,
        }
    }
}
