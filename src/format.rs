//! Message formatting

use crate::context::CallSite;
use crate::profile::Profile;
use crate::severity::Severity;

/// Build the line for `message`: prefix, message and, if requested, the
/// rendered call-site context, separated by single spaces.
pub fn format(
    profile: Profile,
    severity: &Severity,
    message: &str,
    include_context: bool,
    site: &CallSite,
) -> String {
    let mut components = vec![profile.prefix(severity).to_string(), message.to_string()];
    if include_context {
        components.push(profile.render_context(site));
    }
    components.join(" ")
}
