//! Registrable-domain extraction for reputation scoring.
//!
//! A small approximation of a public-suffix lookup: the table below covers
//! the common two-part suffixes, and everything else treats the final label
//! as the whole suffix. Exotic multi-part suffixes can misread the
//! registrable domain; known limitation, acceptable for a fixed blocklist of
//! major platforms.

use url::Url;

/// Common two-part public suffixes.
const TWO_PART_SUFFIXES: &[&str] = &[
    "ac.uk", "co.uk", "gov.uk", "org.uk", "co.jp", "ne.jp", "or.jp", "com.au", "net.au",
    "org.au", "co.in", "co.nz", "com.br", "com.cn", "com.mx", "com.sg", "com.tr", "co.za",
];

/// The registrable domain of `url`: the label directly left of the public
/// suffix, ignoring subdomains. `https://www.pinterest.co.uk/x` gives
/// `pinterest`.
pub(crate) fn registrable_domain(url: &str) -> Option<String> {
    split_host(url).map(|(domain, _)| domain)
}

/// The public suffix of `url`: `edu`, `com`, `co.uk`, ...
pub(crate) fn public_suffix(url: &str) -> Option<String> {
    split_host(url).map(|(_, suffix)| suffix)
}

/// Splits the host into (registrable label, suffix), lowercased.
///
/// Returns `None` for IP addresses and hosts with too few labels to carry a
/// registrable domain.
fn split_host(url: &str) -> Option<(String, String)> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.trim_end_matches('.').to_lowercase();
    if host.parse::<std::net::IpAddr>().is_ok() {
        return None;
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return None;
    }

    let last_two = labels[labels.len() - 2..].join(".");
    if TWO_PART_SUFFIXES.contains(&last_two.as_str()) {
        if labels.len() < 3 {
            return None;
        }
        Some((labels[labels.len() - 3].to_string(), last_two))
    } else {
        Some((
            labels[labels.len() - 2].to_string(),
            labels[labels.len() - 1].to_string(),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_com_host() {
        assert_eq!(
            registrable_domain("https://pinterest.com/pins/x").unwrap(),
            "pinterest"
        );
        assert_eq!(public_suffix("https://pinterest.com/pins/x").unwrap(), "com");
    }

    #[test]
    fn test_subdomains_ignored() {
        assert_eq!(
            registrable_domain("https://www.media.pinterest.com/x").unwrap(),
            "pinterest"
        );
    }

    #[test]
    fn test_two_part_suffix() {
        assert_eq!(
            registrable_domain("https://www.pinterest.co.uk/x").unwrap(),
            "pinterest"
        );
        assert_eq!(
            public_suffix("https://www.pinterest.co.uk/x").unwrap(),
            "co.uk"
        );
    }

    #[test]
    fn test_edu_suffix() {
        assert_eq!(public_suffix("https://pathology.univ.edu/slides").unwrap(), "edu");
        assert_eq!(
            registrable_domain("https://pathology.univ.edu/slides").unwrap(),
            "univ"
        );
    }

    #[test]
    fn test_host_case_normalized() {
        assert_eq!(
            registrable_domain("https://WWW.Example.COM/x").unwrap(),
            "example"
        );
    }

    #[test]
    fn test_ip_address_has_no_domain() {
        assert_eq!(registrable_domain("http://192.168.1.10/x"), None);
    }

    #[test]
    fn test_single_label_host_has_no_domain() {
        assert_eq!(registrable_domain("http://localhost/x"), None);
    }

    #[test]
    fn test_bare_two_part_suffix_host_has_no_domain() {
        // "co.uk" itself carries no registrable label.
        assert_eq!(registrable_domain("https://co.uk/"), None);
    }

    #[test]
    fn test_unparseable_url_is_none() {
        assert_eq!(registrable_domain("not a url"), None);
    }
}
