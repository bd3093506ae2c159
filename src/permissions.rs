// SPDX-License-Identifier: GPL-3.0-only

//! Camera and microphone permission gate
//!
//! Camera access goes through the XDG desktop portal
//! (`org.freedesktop.portal.Camera`), which works both native and sandboxed.
//! When no portal is on the bus, device presence is used instead: a visible
//! camera node means access, none means denied. Microphone permission is
//! derived from audio-source presence.
//!
//! Each modality is an independent tri-state. A denied camera blocks the
//! whole component (the caller is offered a settings redirect); a denied
//! microphone only disables video recording.

use futures::StreamExt;
use std::collections::HashMap;
use tracing::{info, warn};
use zbus::zvariant::{OwnedObjectPath, OwnedValue, Value};

const PORTAL_DEST: &str = "org.freedesktop.portal.Desktop";
const PORTAL_PATH: &str = "/org/freedesktop/portal/desktop";

/// Authorization state for one modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// Not yet checked or request still pending
    #[default]
    Undetermined,
    Granted,
    Denied,
}

impl PermissionState {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionState::Granted)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, PermissionState::Denied)
    }
}

/// Permission state per modality
#[derive(Debug, Clone, Copy, Default)]
pub struct Permissions {
    pub camera: PermissionState,
    pub microphone: PermissionState,
}

/// Check and, if undetermined, request camera access.
///
/// Returns the resolved tri-state; `Undetermined` is only returned when the
/// portal request could not be resolved at all.
pub async fn check_camera_permission() -> PermissionState {
    match request_camera_via_portal().await {
        Ok(state) => state,
        Err(err) => {
            info!(error = %err, "Camera portal unavailable, falling back to device presence");
            if crate::session::enumeration::any_camera_present() {
                PermissionState::Granted
            } else {
                PermissionState::Denied
            }
        }
    }
}

/// Check microphone availability.
///
/// There is no microphone portal on the desktop; an enumerable audio source
/// is treated as granted.
pub async fn check_microphone_permission() -> PermissionState {
    let found = tokio::task::spawn_blocking(crate::session::enumeration::any_audio_source_present)
        .await
        .unwrap_or(false);
    if found {
        PermissionState::Granted
    } else {
        PermissionState::Denied
    }
}

/// Open the system settings so the user can grant camera access
pub fn open_privacy_settings() {
    match std::process::Command::new("cosmic-settings").spawn() {
        Ok(_) => info!("Opened system settings"),
        Err(err) => warn!(error = %err, "Failed to open system settings"),
    }
}

/// Object path the portal allocates for a request, derived from the
/// caller's unique bus name and its handle token
fn request_object_path(unique_name: &str, token: &str) -> String {
    let sender = unique_name.trim_start_matches(':').replace('.', "_");
    format!("{}/request/{}/{}", PORTAL_PATH, sender, token)
}

/// Run the `AccessCamera` portal request and wait for its response
async fn request_camera_via_portal() -> Result<PermissionState, String> {
    let connection = zbus::Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session D-Bus: {}", e))?;

    let camera_proxy = zbus::Proxy::new(
        &connection,
        PORTAL_DEST,
        PORTAL_PATH,
        "org.freedesktop.portal.Camera",
    )
    .await
    .map_err(|e| format!("Failed to create camera portal proxy: {}", e))?;

    let present: bool = camera_proxy
        .get_property("IsCameraPresent")
        .await
        .map_err(|e| format!("Failed to query IsCameraPresent: {}", e))?;

    if !present {
        info!("Portal reports no camera present");
        return Ok(PermissionState::Denied);
    }

    // Each request gets a unique handle token so concurrent requests
    // cannot collide.
    let token = format!("camera_capture_{}", uuid::Uuid::new_v4().simple());

    // The portal may emit Response as soon as the request object exists
    // (a remembered decision answers immediately), so the subscription must
    // be attached before AccessCamera is called. The request path is
    // derived from our unique bus name and the handle token, per the
    // Request interface documentation.
    let unique = connection
        .unique_name()
        .ok_or_else(|| "Session bus connection has no unique name".to_string())?;
    let expected_path = request_object_path(unique.as_str(), &token);

    let request_proxy = zbus::Proxy::new(
        &connection,
        PORTAL_DEST,
        expected_path.as_str(),
        "org.freedesktop.portal.Request",
    )
    .await
    .map_err(|e| format!("Failed to create request proxy: {}", e))?;

    let mut responses = request_proxy
        .receive_signal("Response")
        .await
        .map_err(|e| format!("Failed to subscribe to Response: {}", e))?;

    let mut options: HashMap<&str, Value<'_>> = HashMap::new();
    options.insert("handle_token", Value::new(token));

    let request_path: OwnedObjectPath = camera_proxy
        .call("AccessCamera", &(options,))
        .await
        .map_err(|e| format!("AccessCamera call failed: {}", e))?;

    // Old portal versions predate the predictable path and return their own;
    // when they differ, the early subscription is on the wrong object and
    // has to be moved.
    if request_path.as_str() != expected_path {
        info!(request = %request_path, "Portal returned a legacy request path");
        let legacy_proxy = zbus::Proxy::new(
            &connection,
            PORTAL_DEST,
            request_path,
            "org.freedesktop.portal.Request",
        )
        .await
        .map_err(|e| format!("Failed to create request proxy: {}", e))?;
        responses = legacy_proxy
            .receive_signal("Response")
            .await
            .map_err(|e| format!("Failed to subscribe to Response: {}", e))?;
    }

    info!(request = %expected_path, "Waiting for camera access response");

    // The generous window leaves room for the user to answer an interactive
    // dialog; remembered decisions arrive immediately.
    let signal = tokio::time::timeout(std::time::Duration::from_secs(120), responses.next())
        .await
        .map_err(|_| "Timed out waiting for portal response".to_string())?
        .ok_or_else(|| "Portal response stream closed".to_string())?;

    let (response, _results): (u32, HashMap<String, OwnedValue>) = signal
        .body()
        .deserialize()
        .map_err(|e| format!("Failed to decode portal response: {}", e))?;

    // 0 = success, 1 = user cancelled, 2 = other failure
    if response == 0 {
        info!("Camera access granted");
        Ok(PermissionState::Granted)
    } else {
        info!(response, "Camera access denied");
        Ok(PermissionState::Denied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_undetermined() {
        let perms = Permissions::default();
        assert_eq!(perms.camera, PermissionState::Undetermined);
        assert_eq!(perms.microphone, PermissionState::Undetermined);
        assert!(!perms.camera.is_granted());
        assert!(!perms.camera.is_denied());
    }

    #[test]
    fn request_path_matches_portal_allocation() {
        // Must match what xdg-desktop-portal derives from the sender name,
        // or the early Response subscription listens on the wrong object
        // and a remembered decision is missed.
        assert_eq!(
            request_object_path(":1.42", "camera_capture_abc123"),
            "/org/freedesktop/portal/desktop/request/1_42/camera_capture_abc123"
        );
        assert_eq!(
            request_object_path(":1.0.5", "t"),
            "/org/freedesktop/portal/desktop/request/1_0_5/t"
        );
    }
}
