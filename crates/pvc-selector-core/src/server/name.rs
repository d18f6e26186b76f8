//! Plugin name validation: `<dns-subdomain>/<name>`, e.g. `example.io/my-action`.

use crate::error::PluginError;

const MAX_SUBDOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

pub fn validate_plugin_name(name: &str) -> Result<(), PluginError> {
    let invalid = |reason| PluginError::InvalidName {
        name: name.to_string(),
        reason,
    };

    let (prefix, suffix) = name
        .split_once('/')
        .ok_or_else(|| invalid("expected <dns-subdomain>/<name>"))?;
    if suffix.contains('/') {
        return Err(invalid("more than one '/'"));
    }
    if prefix.is_empty() || suffix.is_empty() {
        return Err(invalid("both halves must be non-empty"));
    }
    if !is_dns_subdomain(prefix) {
        return Err(invalid("prefix must be a lowercase DNS subdomain such as example.io"));
    }
    if !suffix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(invalid("name may contain only letters, digits, '.', '_' and '-'"));
    }
    Ok(())
}

fn is_dns_subdomain(s: &str) -> bool {
    s.len() <= MAX_SUBDOMAIN_LEN && s.contains('.') && s.split('.').all(is_dns_label)
}

fn is_dns_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
