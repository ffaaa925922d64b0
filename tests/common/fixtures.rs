//! Test fixtures: function sources and fake bundler scripts.

/// Minimal function exporting the default `handler`.
pub const HANDLER_SOURCE: &str = r#"export const handler = async () => ({
  statusCode: 200,
  body: JSON.stringify({ ok: true }),
});
"#;

/// Same function with a different response body.
pub const HANDLER_SOURCE_V2: &str = r#"export const handler = async () => ({
  statusCode: 200,
  body: JSON.stringify({ ok: false }),
});
"#;

/// Stand-in for esbuild: copies the entry into `<outdir>/index.js`.
/// Deterministic, so repeated builds produce identical bytes.
pub const FAKE_ESBUILD: &str = r#"#!/bin/sh
entry="$1"
out=dist
for arg in "$@"; do
  case "$arg" in
    --outdir=*) out="${arg#--outdir=}" ;;
  esac
done
mkdir -p "$out"
{ echo '"use strict";'; cat "$entry"; } > "$out/index.js"
"#;

/// Bundler that reports a syntax error and exits non-zero after a partial write.
pub const FAILING_ESBUILD: &str = r#"#!/bin/sh
mkdir -p dist
echo partial > dist/index.js
echo "X [ERROR] Expected ';' but found '}'" >&2
exit 1
"#;
