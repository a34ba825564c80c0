//! Remote documentation listing as returned by the GitHub contents API.

/// Directory listing of `docs/` as `(name, path)` pairs, including one untracked file.
pub const LISTING: &[(&str, &str)] = &[
    ("file1.md", "docs/file1.md"),
    ("file2.md", "docs/file2.md"),
    ("notMd.txt", "docs/notMd.txt"),
];

/// Latest commit date per path. `docs/notMd.txt` has history too, so filtering is what
/// keeps it out of a batch.
pub const REVISIONS: &[(&str, &str)] = &[
    ("docs/file1.md", "2025-06-30T12:00:00Z"),
    ("docs/file2.md", "2025-06-29T10:00:00Z"),
    ("docs/notMd.txt", "2025-06-28T08:00:00Z"),
];

/// Raw GitHub contents API response for the listing above.
pub fn contents_json() -> serde_json::Value {
    serde_json::Value::Array(
        LISTING
            .iter()
            .map(|(name, path)| {
                serde_json::json!({
                    "name": name,
                    "path": path,
                    "type": "file",
                    "sha": "0000000000000000000000000000000000000000",
                })
            })
            .collect(),
    )
}

/// Raw GitHub commits API response (`per_page=1`) for a single commit date.
pub fn commits_json(date: &str) -> serde_json::Value {
    serde_json::json!([
        {
            "sha": "1111111111111111111111111111111111111111",
            "commit": {
                "author": { "name": "Docs Bot", "date": date },
                "committer": { "name": "GitHub", "date": date },
                "message": "Update docs"
            }
        }
    ])
}
