//! Node binding. Built only with the `napi` feature.

use napi_derive::napi;
use oxc_span::SourceType;

use crate::options::TransformOptions;
use crate::transform::PrivateMembersTransform;

fn to_napi_error(err: crate::TransformError) -> napi::Error {
    napi::Error::from_reason(format!("[PrivateMembers] {}", err))
}

fn source_type_for(filename: Option<&str>) -> SourceType {
    filename
        .and_then(|name| SourceType::from_path(name).ok())
        .unwrap_or_else(SourceType::mjs)
}

fn build_transform(options_json: Option<String>) -> napi::Result<PrivateMembersTransform> {
    match options_json {
        Some(json) => PrivateMembersTransform::from_json(&json),
        None => PrivateMembersTransform::new(TransformOptions::default()),
    }
    .map_err(to_napi_error)
}

/// One-shot transform. Aliases always start at `$1`.
#[napi]
pub fn transform_private_members(
    code: String,
    filename: Option<String>,
    options_json: Option<String>,
) -> napi::Result<String> {
    let mut transform = build_transform(options_json)?;
    let output = transform
        .transform_source(&code, source_type_for(filename.as_deref()))
        .map_err(to_napi_error)?;
    Ok(output.code)
}

/// Long-lived transform for bundlers; with `memoize` aliases carry over
/// between files.
#[napi]
pub struct PrivateMembersTransformer {
    inner: PrivateMembersTransform,
}

#[napi]
impl PrivateMembersTransformer {
    #[napi(constructor)]
    pub fn new(options_json: Option<String>) -> napi::Result<Self> {
        Ok(PrivateMembersTransformer {
            inner: build_transform(options_json)?,
        })
    }

    #[napi]
    pub fn transform(&mut self, code: String, filename: Option<String>) -> napi::Result<String> {
        let output = self
            .inner
            .transform_source(&code, source_type_for(filename.as_deref()))
            .map_err(to_napi_error)?;
        Ok(output.code)
    }

    #[napi]
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
