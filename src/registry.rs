//! Static platform registry.
//!
//! The registry is an ordered, immutable table mapping a platform name to the
//! way a public profile can be probed for a username. Order is significant:
//! it fixes both the probing sequence and the ordering of report buckets.
//! Platforms without a public username lookup carry a reason string instead
//! of a URL template and never trigger a request.

use std::sync::OnceLock;
use url::Url;

/// How a platform can (or cannot) be probed for a username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeMethod {
    /// URL template with exactly one `{}` slot for the username.
    UrlTemplate(String),
    /// No public lookup exists; carries a human-readable reason.
    Unsupported(String),
}

/// Configuration entry describing how to probe one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDescriptor {
    /// Platform name, e.g. `github`.
    pub name: String,
    /// Probe method for this platform.
    pub probe: ProbeMethod,
}

impl PlatformDescriptor {
    /// Builds a probeable descriptor from a name and URL template.
    pub fn probeable(name: &str, template: &str) -> Self {
        PlatformDescriptor {
            name: name.to_string(),
            probe: ProbeMethod::UrlTemplate(template.to_string()),
        }
    }

    /// Builds an unsupported descriptor from a name and reason.
    pub fn unsupported(name: &str, reason: &str) -> Self {
        PlatformDescriptor {
            name: name.to_string(),
            probe: ProbeMethod::Unsupported(reason.to_string()),
        }
    }

    /// True if this platform has a URL template and will be probed.
    pub fn is_probeable(&self) -> bool {
        matches!(self.probe, ProbeMethod::UrlTemplate(_))
    }
}

enum Entry {
    Template(&'static str),
    NoLookup(&'static str),
}

use Entry::{NoLookup, Template};

/// Platform table, in probing order.
const PLATFORM_TABLE: &[(&str, Entry)] = &[
    ("github", Template("https://github.com/{}")),
    ("twitter", Template("https://twitter.com/{}")),
    ("instagram", Template("https://instagram.com/{}")),
    ("reddit", Template("https://reddit.com/user/{}")),
    ("telegram", Template("https://t.me/{}")),
    ("youtube", Template("https://youtube.com/@{}")),
    ("tiktok", Template("https://tiktok.com/@{}")),
    ("linkedin", Template("https://linkedin.com/in/{}")),
    ("facebook", Template("https://facebook.com/{}")),
    (
        "discord",
        NoLookup("Discord usernames not publicly searchable"),
    ),
    ("snapchat", Template("https://snapchat.com/add/{}")),
    ("pinterest", Template("https://pinterest.com/{}")),
    ("tumblr", Template("https://{}.tumblr.com")),
    ("medium", Template("https://medium.com/@{}")),
    ("twitch", Template("https://twitch.tv/{}")),
    ("spotify", Template("https://open.spotify.com/user/{}")),
    ("soundcloud", Template("https://soundcloud.com/{}")),
    ("vimeo", Template("https://vimeo.com/{}")),
    ("behance", Template("https://behance.net/{}")),
    ("dribbble", Template("https://dribbble.com/{}")),
    ("deviantart", Template("https://{}.deviantart.com")),
    ("flickr", Template("https://flickr.com/people/{}")),
    ("goodreads", Template("https://goodreads.com/{}")),
    ("keybase", Template("https://keybase.io/{}")),
    ("pastebin", Template("https://pastebin.com/u/{}")),
    ("hackernews", Template("https://news.ycombinator.com/user?id={}")),
    ("about.me", Template("https://about.me/{}")),
    ("gravatar", Template("https://gravatar.com/{}")),
    ("foursquare", Template("https://foursquare.com/{}")),
    ("slideshare", Template("https://slideshare.net/{}")),
    ("scribd", Template("https://scribd.com/{}")),
    ("badoo", Template("https://badoo.com/profile/{}")),
    ("last.fm", Template("https://last.fm/user/{}")),
    ("cash.app", Template("https://cash.app/${}")),
    ("venmo", Template("https://venmo.com/{}")),
    ("patreon", Template("https://patreon.com/{}")),
    ("onlyfans", Template("https://onlyfans.com/{}")),
    ("linktree", Template("https://linktr.ee/{}")),
    (
        "clubhouse",
        NoLookup("Clubhouse usernames not publicly searchable"),
    ),
    (
        "signal",
        NoLookup("Signal usernames not publicly searchable"),
    ),
    (
        "whatsapp",
        NoLookup("WhatsApp usernames not publicly searchable"),
    ),
];

/// Returns the full platform registry, built once at first use.
pub fn platforms() -> &'static [PlatformDescriptor] {
    static REGISTRY: OnceLock<Vec<PlatformDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        PLATFORM_TABLE
            .iter()
            .map(|(name, entry)| match entry {
                Template(template) => PlatformDescriptor::probeable(name, template),
                NoLookup(reason) => PlatformDescriptor::unsupported(name, reason),
            })
            .collect()
    })
}

/// Substitutes a username into a URL template and validates the result.
///
/// The username is inserted verbatim, without percent-encoding, matching the
/// behavior the probed platforms are known to accept for profile paths. The
/// substituted string must still parse as a URL; anything else is rejected
/// here so the executor never issues a request for a malformed target.
pub fn build_profile_url(template: &str, username: &str) -> Result<String, url::ParseError> {
    let substituted = template.replacen("{}", username, 1);
    Url::parse(&substituted)?;
    Ok(substituted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size_and_order() {
        let registry = platforms();
        assert_eq!(registry.len(), 41);
        // Order fixes the probing sequence; spot-check the ends and a middle entry
        assert_eq!(registry[0].name, "github");
        assert_eq!(registry[4].name, "telegram");
        assert_eq!(registry[40].name, "whatsapp");
    }

    #[test]
    fn test_registry_is_same_instance() {
        // OnceLock must hand back the same table every time
        let a = platforms().as_ptr();
        let b = platforms().as_ptr();
        assert_eq!(a, b);
    }

    #[test]
    fn test_templates_have_exactly_one_slot() {
        for descriptor in platforms() {
            if let ProbeMethod::UrlTemplate(template) = &descriptor.probe {
                assert_eq!(
                    template.matches("{}").count(),
                    1,
                    "template for {} must have exactly one slot",
                    descriptor.name
                );
            }
        }
    }

    #[test]
    fn test_unsupported_platforms() {
        let unsupported: Vec<&str> = platforms()
            .iter()
            .filter(|d| !d.is_probeable())
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(unsupported, vec!["discord", "clubhouse", "signal", "whatsapp"]);
    }

    #[test]
    fn test_expected_platforms_present() {
        let names: Vec<&str> = platforms().iter().map(|d| d.name.as_str()).collect();
        for expected in [
            "github",
            "hackernews",
            "about.me",
            "last.fm",
            "cash.app",
            "linktree",
        ] {
            assert!(names.contains(&expected), "missing platform {expected}");
        }
    }

    #[test]
    fn test_build_profile_url_substitutes_username() {
        let url = build_profile_url("https://github.com/{}", "somebody").unwrap();
        assert_eq!(url, "https://github.com/somebody");
    }

    #[test]
    fn test_build_profile_url_subdomain_template() {
        let url = build_profile_url("https://{}.tumblr.com", "somebody").unwrap();
        assert_eq!(url, "https://somebody.tumblr.com");
    }

    #[test]
    fn test_build_profile_url_rejects_unparseable_result() {
        // A subdomain slot filled with whitespace does not produce a valid host
        assert!(build_profile_url("https://{}.tumblr.com", "bad name").is_err());
    }

    #[test]
    fn test_all_templates_build_with_plain_username() {
        for descriptor in platforms() {
            if let ProbeMethod::UrlTemplate(template) = &descriptor.probe {
                assert!(
                    build_profile_url(template, "somebody").is_ok(),
                    "template for {} rejected a plain username",
                    descriptor.name
                );
            }
        }
    }
}
