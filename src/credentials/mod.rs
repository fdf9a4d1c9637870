//! Startup credential provisioning.
//!
//! Cloud SDKs downstream of this service expect credentials at a filesystem
//! path named by `GOOGLE_APPLICATION_CREDENTIALS`. Serverless hosts can only
//! inject secrets through environment variables, so at startup the JSON blob
//! in `GOOGLE_APPLICATION_CREDENTIALS_JSON` is materialized into a file and
//! the pointer variable is set to its path. Both writes happen exactly once
//! per process, strictly before the first request is served.

use crate::config::CredentialsConfig;
use crate::error::{GatewayError, Result};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Materialize the environment-supplied credential into an on-disk artifact.
///
/// Reads the secret variable named by `config.secret_env`. An absent or
/// empty variable, or an empty JSON object, is a silent no-op returning
/// `Ok(None)`: collaborators that require credentials treat their absence as
/// their own runtime error, not this component's.
///
/// A non-empty JSON object is written verbatim to `config.artifact_path`
/// (overwriting any existing file) and the pointer variable named by
/// `config.pointer_env` is set to that path. The pointer is only set after
/// the file write has fully succeeded, so request handling never observes a
/// pointer to a missing or partial file.
///
/// Malformed JSON and filesystem write failures are fatal startup errors.
pub fn provision(config: &CredentialsConfig) -> Result<Option<PathBuf>> {
    let raw = match env::var(&config.secret_env) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => {
            debug!(
                "{} absent or empty, skipping credential provisioning",
                config.secret_env
            );
            return Ok(None);
        }
    };

    let parsed: Value = serde_json::from_str(&raw).map_err(|e| {
        GatewayError::Credentials(format!(
            "malformed JSON in {}: {}",
            config.secret_env, e
        ))
    })?;

    let object = match &parsed {
        Value::Object(map) => map,
        _ => {
            return Err(GatewayError::Credentials(format!(
                "{} must contain a JSON object, got {}",
                config.secret_env,
                json_type_name(&parsed)
            )));
        }
    };

    if object.is_empty() {
        debug!("{} is an empty object, nothing to provision", config.secret_env);
        return Ok(None);
    }

    let path = PathBuf::from(&config.artifact_path);
    write_artifact(&path, &parsed)?;
    env::set_var(&config.pointer_env, &config.artifact_path);

    info!(
        "Provisioned credential artifact at {} ({} -> path)",
        path.display(),
        config.pointer_env
    );
    Ok(Some(path))
}

/// Release hook paired with [`provision`], invoked exactly once on shutdown.
///
/// By default this does nothing: the artifact outlives the process. With
/// `cleanup_on_shutdown` enabled it removes the artifact and unsets the
/// pointer, so a restart with a different secret never serves stale
/// credentials.
pub fn teardown(config: &CredentialsConfig) -> Result<()> {
    if !config.cleanup_on_shutdown {
        return Ok(());
    }

    let path = Path::new(&config.artifact_path);
    if path.exists() {
        fs::remove_file(path)?;
        info!("Removed credential artifact at {}", path.display());
    }
    env::remove_var(&config.pointer_env);
    Ok(())
}

// Write to a temp sibling and rename into place. The pointer variable is
// only ever set after this returns, so either both the file and the pointer
// are visible or neither is.
fn write_artifact(path: &Path, value: &Value) -> Result<()> {
    let serialized = serde_json::to_string(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serialized)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
