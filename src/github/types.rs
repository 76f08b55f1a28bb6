use serde::{Deserialize, Serialize};

/// A downloadable file attached to a release.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_count: u64,
}

/// The subset of a GitHub release that relkit reads.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}
