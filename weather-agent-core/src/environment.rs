//! Runtime environment detection
//!
//! Picks the address of the local Ollama service depending on whether the
//! process runs inside a container.

use std::path::Path;
use tracing::debug;

/// Marker file created by the Docker runtime in every container
pub const DOCKER_MARKER: &str = "/.dockerenv";

/// Ollama address when running on the host
pub const LOCAL_MODEL_HOST: &str = "http://localhost:11434";

/// Ollama address as seen from inside a container
pub const DOCKER_MODEL_HOST: &str = "http://host.docker.internal:11434";

/// Whether the process runs inside a Docker container
pub fn is_running_in_docker() -> bool {
    marker_exists(Path::new(DOCKER_MARKER))
}

/// Whether `marker` exists at call time
pub fn marker_exists(marker: &Path) -> bool {
    marker.exists()
}

/// Default model host for the given environment
pub fn resolve_model_host(in_docker: bool) -> String {
    let host = if in_docker { DOCKER_MODEL_HOST } else { LOCAL_MODEL_HOST };
    debug!("Resolved model host {} (in_docker={})", host, in_docker);
    host.to_string()
}
