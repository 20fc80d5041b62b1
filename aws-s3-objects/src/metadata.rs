/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Content-Type and Cache-Control inference from an object key.

/// Content type used when no known extension appears in the key
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Cache-Control value for objects that change in place (pages, data, logs)
pub const NO_CACHE: &str = "no-cache";

/// Cache-Control value for everything else (one year)
pub const LONG_LIVED: &str = "max-age=31536000";

// Order matters: `.json` has to be checked before `.js`.
const CONTENT_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".json", "application/json"),
    (".js", "application/x-javascript"),
    (".png", "image/png"),
    (".jpg", "image/jpg"),
];

const NO_CACHE_SUFFIXES: &[&str] = &[".html", ".json", ".log"];

/// Infer the `Content-Type` of an object from its key.
///
/// The lowercased key is searched for each known extension *anywhere* in the string, the
/// first match wins. `site.html/app.js` is therefore `text/html`.
pub fn content_type_for(key: &str) -> &'static str {
    let key = key.to_lowercase();
    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| key.contains(ext))
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

/// Infer the `Cache-Control` header of an object from its key.
///
/// Keys ending in `.html`, `.json` or `.log` (ignoring case) are not cached, everything else
/// may be cached for a year.
pub fn cache_control_for(key: &str) -> &'static str {
    let key = key.to_lowercase();
    if NO_CACHE_SUFFIXES.iter().any(|suffix| key.ends_with(suffix)) {
        NO_CACHE
    } else {
        LONG_LIVED
    }
}
