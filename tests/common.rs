//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary documentation directories used
//! across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Markdown source modelled on a framework resource page.
pub const CORE_DOC: &str = "
# AS-Core

**AS Framework Core** - The foundation of the AS server framework.

## Features

- **Player Management** - Complete player data handling
- **Money System** - Multiple account types

## Installation

1. Add `as-core` to your resources folder
2. Add to `server.cfg`:

```cfg
ensure oxmysql
ensure as-core

# Load centralized configuration
exec @as-core/convars.cfg
```

## Dependencies

- [oxmysql](https://github.com/overextended/oxmysql)
- [ox_lib](https://github.com/overextended/ox_lib)
";

/// Second resource page with a lua block.
pub const HUD_DOC: &str = "
# AS-HUD

## Usage

```lua
exports['as-hud']:SetVisible(true)
if speed > 100 and fuel < 0.25 then print('<low>') end
```
";

/// Creates temporary documentation directory containing the given files.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_docs_dir(files: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (name, content) in files {
        write_file(dir.path(), name, content)?;
    }
    Ok(dir)
}

/// Writes file to directory, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
