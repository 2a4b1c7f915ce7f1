mod contact;
#[cfg(test)]
pub(crate) mod fixture;
mod load;
mod model;

pub use contact::{avatar_url, mailto_uri, schedule_uri};
pub use load::load_org_chart;
pub use model::{EmployeeNode, OrgChart};
