//! "My User Access" bundle selection from the `bundle` query parameter.

use crate::query::parse_query;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::error;

pub const BUNDLE_PARAM: &str = "bundle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Bundle {
    Rhel,
    Ansible,
    Openshift,
    ApplicationServices,
    CostManagement,
    Subscriptions,
}

impl Bundle {
    pub fn title(&self) -> &'static str {
        match self {
            Bundle::Rhel => "Red Hat Enterprise Linux",
            Bundle::Ansible => "Ansible Automation Platform",
            Bundle::Openshift => "OpenShift",
            Bundle::ApplicationServices => "Application Services",
            Bundle::CostManagement => "Cost Management",
            Bundle::Subscriptions => "Subscriptions",
        }
    }

    /// Applications whose permissions are listed for this bundle
    pub fn applications(&self) -> &'static [&'static str] {
        match self {
            Bundle::Rhel => &["advisor", "compliance", "drift", "patch", "vulnerability", "inventory"],
            Bundle::Ansible => &["automation-analytics", "automation-hub", "catalog", "approval"],
            Bundle::Openshift => &["cost-management", "ocm"],
            Bundle::ApplicationServices => &["application-services"],
            Bundle::CostManagement => &["cost-management"],
            Bundle::Subscriptions => &["subscriptions"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleRoute {
    Bundle(Bundle),
    /// Nothing (or nothing known) was requested
    Placeholder,
}

/// Resolves the bundle requested by `query`, e.g. `?bundle=rhel`
pub fn resolve_bundle(query: &str) -> BundleRoute {
    let params = parse_query(query);
    let Some(requested) = params.get(BUNDLE_PARAM).and_then(|v| v.first()) else {
        return BundleRoute::Placeholder;
    };
    match Bundle::from_str(requested) {
        Ok(bundle) => BundleRoute::Bundle(bundle),
        Err(_) => {
            error!("Unknown bundle requested: {}", requested);
            BundleRoute::Placeholder
        }
    }
}
