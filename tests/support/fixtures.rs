//! Test fixtures and constants.

/// User-scope .env shared across a developer's sites.
pub const HOME_ENV: &str = "\
# shared credentials
MAILGUN_KEY=key-home
DB_PASSWORD_KEY=from-home
SHARED=home
";

/// Project-scope .env; overrides SHARED and DB_PASSWORD_KEY.
pub const PROJECT_ENV: &str = "\
[site]
SHARED=project
DB_PASSWORD_KEY=from-project
DB_PASSWORD_REF=op://web/database/password
";

/// Projects list as hand-edited YAML, indented with tabs.
pub const PROJECTS_YAML: &str = "\
projects:
\t- id: bakery
\t  title: Bakery rebrand
\t  year: 2021
\t- id: cafe
\t  title: Cafe menu
\t  year: 2023
";

/// Flat list of records for CSV export.
pub const PROJECTS_JSON: &str = r#"[
  {"id": "bakery", "title": "Bakery rebrand", "year": 2021},
  {"id": "cafe", "title": "Cafe menu", "year": 2023}
]"#;

/// Blog post with front matter.
pub const POST_MD: &str = "\
---
title: Opening week
tags: [news, cafe]
---
We are open.
";

/// Fake secret tool. Logs each reference and answers by prefix:
/// `op://fail/...` exits 1, `op://warn/...` writes to stderr as well,
/// anything else echoes the reference back padded with spaces.
///
/// Only shell builtins are used so it runs with PATH set to the bin dir.
pub const FAKE_OP: &str = r#"#!/bin/sh
[ "$1" = "read" ] || { echo "usage: op read <reference>" >&2; exit 2; }
echo "$2" >> "${0%/*}/calls.log"
case "$2" in
  op://fail/*) echo "[ERROR] \"$2\" isn't an item" >&2; exit 1 ;;
  op://warn/*) echo "value-with-warning"; echo "[WARN] session expiring" >&2 ;;
  *) echo "  resolved:$2  " ;;
esac
"#;
