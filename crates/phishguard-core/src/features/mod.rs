//! Lexical feature extraction: URL string to a fixed 31-slot vector.
//!
//! Slot order matches the column order the classifier was trained on. Only
//! the first nine slots are computed from the URL text; the rest stand in for
//! signals that need network, page content or historical data, which are never
//! fetched, and always carry [`NEUTRAL`].

mod frame;
mod lexical;

pub use frame::{check_schema, AdaptError, FeatureFrame};

use crate::url_model::ParsedUrl;

/// Number of slots in a feature vector.
pub const FEATURE_COUNT: usize = 31;

/// Value used for every signal this system does not compute.
pub const NEUTRAL: i64 = 0;

/// One column of the classifier input, in training order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Index,
    UsingIp,
    LongUrl,
    ShortUrl,
    SymbolAt,
    Redirecting,
    PrefixSuffix,
    SubDomains,
    Https,
    DomainRegLen,
    Favicon,
    NonStdPort,
    HttpsDomainUrl,
    RequestUrl,
    AnchorUrl,
    LinksInScriptTags,
    ServerFormHandler,
    InfoEmail,
    AbnormalUrl,
    WebsiteForwarding,
    StatusBarCust,
    DisableRightClick,
    UsingPopupWindow,
    IframeRedirection,
    AgeOfDomain,
    DnsRecording,
    WebsiteTraffic,
    PageRank,
    GoogleIndex,
    LinksPointingToPage,
    StatsReport,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Index,
        Feature::UsingIp,
        Feature::LongUrl,
        Feature::ShortUrl,
        Feature::SymbolAt,
        Feature::Redirecting,
        Feature::PrefixSuffix,
        Feature::SubDomains,
        Feature::Https,
        Feature::DomainRegLen,
        Feature::Favicon,
        Feature::NonStdPort,
        Feature::HttpsDomainUrl,
        Feature::RequestUrl,
        Feature::AnchorUrl,
        Feature::LinksInScriptTags,
        Feature::ServerFormHandler,
        Feature::InfoEmail,
        Feature::AbnormalUrl,
        Feature::WebsiteForwarding,
        Feature::StatusBarCust,
        Feature::DisableRightClick,
        Feature::UsingPopupWindow,
        Feature::IframeRedirection,
        Feature::AgeOfDomain,
        Feature::DnsRecording,
        Feature::WebsiteTraffic,
        Feature::PageRank,
        Feature::GoogleIndex,
        Feature::LinksPointingToPage,
        Feature::StatsReport,
    ];

    /// Slot index in the vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name as it appears in the training schema.
    pub fn column_name(self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }

    /// True for slots that always hold [`NEUTRAL`].
    pub fn is_neutral(self) -> bool {
        self.index() > Feature::Https.index()
    }
}

/// Column names in slot order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Index",
    "UsingIP",
    "LongURL",
    "ShortURL",
    "Symbol@",
    "Redirecting//",
    "PrefixSuffix-",
    "SubDomains",
    "HTTPS",
    "DomainRegLen",
    "Favicon",
    "NonStdPort",
    "HTTPSDomainURL",
    "RequestURL",
    "AnchorURL",
    "LinksInScriptTags",
    "ServerFormHandler",
    "InfoEmail",
    "AbnormalURL",
    "WebsiteForwarding",
    "StatusBarCust",
    "DisableRightClick",
    "UsingPopupWindow",
    "IframeRedirection",
    "AgeofDomain",
    "DNSRecording",
    "WebsiteTraffic",
    "PageRank",
    "GoogleIndex",
    "LinksPointingToPage",
    "StatsReport",
];

/// Ordered feature values for one URL. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVector([i64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn get(&self, feature: Feature) -> i64 {
        self.0[feature.index()]
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(column name, value)` pairs in slot order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

/// Source of feature vectors for the analyzer.
pub trait Extractor {
    fn extract(&self, url: &str) -> FeatureVector;
}

/// The production extractor: lexical signals only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalExtractor;

impl Extractor for LexicalExtractor {
    fn extract(&self, url: &str) -> FeatureVector {
        extract(url)
    }
}

/// Computes the feature vector for `url`.
///
/// Never fails: an unsplittable URL contributes empty host and path, and the
/// string-level signals (length, `@`, `https` prefix) still apply.
pub fn extract(url: &str) -> FeatureVector {
    let parsed = ParsedUrl::parse_lenient(url);
    let host = parsed.host.as_str();
    let path = parsed.path.as_str();

    let mut slots = [NEUTRAL; FEATURE_COUNT];
    slots[Feature::Index.index()] = 0;
    slots[Feature::UsingIp.index()] = flag(lexical::starts_with_dotted_quad(host));
    slots[Feature::LongUrl.index()] = flag(lexical::is_long(url));
    slots[Feature::ShortUrl.index()] = flag(lexical::is_short(url));
    slots[Feature::SymbolAt.index()] = flag(url.contains('@'));
    slots[Feature::Redirecting.index()] = flag(path.contains("//"));
    slots[Feature::PrefixSuffix.index()] = flag(host.contains('-'));
    slots[Feature::SubDomains.index()] = lexical::subdomain_count(host);
    slots[Feature::Https.index()] = flag(url.starts_with("https"));

    FeatureVector(slots)
}

fn flag(b: bool) -> i64 {
    i64::from(b)
}
