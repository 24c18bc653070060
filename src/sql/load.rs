use super::*;

/// Bulk-load COPY for the events staging table.
///
/// Field mapping comes from an explicit jsonpaths file because the raw
/// log keys (camelCase) do not line up with the staging column names.
/// MANIFEST makes the warehouse read `manifest` as a file list rather
/// than a key prefix.
pub fn copy_events(manifest: &str, arn: &str, jsonpaths: &str) -> String {
    format!(
        "COPY {STAGING_EVENTS} FROM '{manifest}'
CREDENTIALS 'aws_iam_role={arn}'
JSON '{jsonpaths}'
MANIFEST
COMPUPDATE OFF STATUPDATE OFF;"
    )
}

/// Bulk-load COPY for the songs staging table. Song metadata keys match
/// the staging columns, so 'auto' mapping is enough.
pub fn copy_songs(manifest: &str, arn: &str) -> String {
    format!(
        "COPY {STAGING_SONGS} FROM '{manifest}'
CREDENTIALS 'aws_iam_role={arn}'
JSON 'auto'
MANIFEST
COMPUPDATE OFF STATUPDATE OFF;"
    )
}
