pub const DEFAULT_COMPOSE_COMMAND: &str = "docker-compose";
pub const DEFAULT_PYTHON: &str = "python";
pub const DEFAULT_SCRIPT: &str = "snap.py";

/// Forced clean rebuild, no layer cache, services built in parallel.
pub const BUILD_ARGS: &[&str] = &["build", "--force-rm", "--no-cache", "--parallel"];
/// Start detached without triggering another build.
pub const START_ARGS: &[&str] = &["up", "--no-build", "-d"];
pub const TEARDOWN_ARGS: &[&str] = &["down"];

/// Version pin exported to the build step.
pub const VERSION_PIN_ENV: &str = "FACEBOUND_VERSION";
/// Install-source URL exported to the build step.
pub const INSTALL_URL_ENV: &str = "FACEBOUND_INSTALL_URL";

/// Reported when a step's program could not be spawned (shell "command not found").
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;
/// Offset added to a terminating signal number (SIGKILL -> 137).
pub const SIGNAL_EXIT_CODE_BASE: i32 = 128;
/// Fallback when a process ended without exit code or signal.
pub const UNKNOWN_EXIT_CODE: i32 = 1;
