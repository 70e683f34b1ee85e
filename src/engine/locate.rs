//! # 压缩引擎定位
//!
//! 在显式路径或 PATH 中查找 Ghostscript 可执行文件，并读取其版本号。
//!
//! ## 依赖关系
//! - 被 `engine/worker.rs`, `commands/check.rs` 使用
//! - 使用 `regex` 解析版本输出

use crate::error::{Result, SqueezeError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 各平台候选的引擎可执行文件名
#[cfg(not(windows))]
const ENGINE_CANDIDATES: &[&str] = &["gs"];
#[cfg(windows)]
const ENGINE_CANDIDATES: &[&str] = &["gswin64c.exe", "gswin32c.exe", "gs.exe"];

/// 定位 Ghostscript 可执行文件
///
/// 优先使用显式指定的路径；否则在 PATH 的每个目录中依次查找候选名。
pub fn locate_engine(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(SqueezeError::EngineNotFound {
            hint: format!("no such file: {}", path.display()),
        });
    }

    let path_var = std::env::var_os("PATH").unwrap_or_default();
    for dir in std::env::split_paths(&path_var) {
        for name in ENGINE_CANDIDATES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(SqueezeError::EngineNotFound {
        hint: format!(
            "searched PATH for {}; install Ghostscript or pass --gs-path",
            ENGINE_CANDIDATES.join(", ")
        ),
    })
}

/// 查询引擎版本号（`gs --version` 输出形如 "10.02.1"）
pub fn engine_version(engine: &Path) -> Result<String> {
    let out = Command::new(engine)
        .arg("--version")
        .output()
        .map_err(|e| SqueezeError::EngineLaunchFailed {
            reason: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&out.stdout);
    let re = Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").map_err(|e| SqueezeError::Other(e.to_string()))?;
    match re.find(stdout.trim()) {
        Some(m) => Ok(m.as_str().to_string()),
        None => Err(SqueezeError::Other(format!(
            "unrecognized version output: '{}'",
            stdout.trim()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_missing() {
        let err = locate_engine(Some(Path::new("/nonexistent/gs"))).unwrap_err();
        assert!(err.to_string().contains("Ghostscript binary not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_explicit_path_found() {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gs");
        writeln!(std::fs::File::create(&path).unwrap(), "#!/bin/sh").unwrap();
        let found = locate_engine(Some(&path)).unwrap();
        assert_eq!(found, path);
    }

    #[cfg(unix)]
    #[test]
    fn test_engine_version_parse() {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gs");
        {
            let mut f = std::fs::File::create(&path).unwrap();
            writeln!(f, "#!/bin/sh\necho 10.02.1").unwrap();
        }
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(engine_version(&path).unwrap(), "10.02.1");
    }
}
