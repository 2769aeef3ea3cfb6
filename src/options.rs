use serde::Deserialize;
use serde_json::Value;

use crate::blacklist::ExclusionPattern;
use crate::error::Result;

/// Configuration of a [`crate::PrivateMembersTransform`].
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Extra exclusions, tried before the built-in ones.
    pub blacklist: Vec<ExclusionPattern>,
    /// Keep aliases across runs instead of restarting at `$1`.
    pub memoize: bool,
    /// Only rename class members, object members with identifier keys,
    /// `this.x` accesses and `Foo.prototype.x = ...` targets.
    pub only_class_members: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions {
            blacklist: Vec::new(),
            memoize: false,
            only_class_members: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptions {
    #[serde(default, alias = "exclusions")]
    blacklist: Vec<Value>,
    #[serde(default)]
    memoize: bool,
    #[serde(default = "default_only_class_members", alias = "restrictToAggregateMembers")]
    only_class_members: bool,
}

fn default_only_class_members() -> bool {
    true
}

impl TransformOptions {
    /// Reads options from a JSON object such as
    /// `{ "blacklist": ["_keep", { "regex": "^_internal" }], "memoize": true }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawOptions = serde_json::from_str(json)?;
        let blacklist = raw
            .blacklist
            .iter()
            .map(ExclusionPattern::from_value)
            .collect::<Result<Vec<_>>>()?;

        Ok(TransformOptions {
            blacklist,
            memoize: raw.memoize,
            only_class_members: raw.only_class_members,
        })
    }
}
