use serde::{Deserialize, Serialize};

/// Runtime configuration for the gallery page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    /// Prefix of every video route, without a trailing slash
    pub base_path: String,
    /// Cookie carrying the CSRF token
    pub csrf_cookie: String,
    pub edit_reload_ms: u32,
    pub delete_reload_ms: u32,
    pub thumbnail_reload_ms: u32,
    /// Lifetime of a status banner
    pub banner_ttl_ms: u32,
    pub gallery_particles: usize,
    pub default_particles: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_path: "/videos".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            edit_reload_ms: 1000,
            delete_reload_ms: 1000,
            thumbnail_reload_ms: 1500,
            banner_ttl_ms: 5000,
            gallery_particles: 50,
            default_particles: 30,
        }
    }
}

impl GalleryConfig {
    /// Detail page of a video, used as the navigation target
    pub fn video_url(&self, video_id: &str) -> String {
        format!("{}/{}/", self.base_path.trim_end_matches('/'), video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: GalleryConfig =
            serde_json::from_str(r#"{"basePath": "/media/", "bannerTtlMs": 2000}"#).unwrap();

        assert_eq!(config.base_path, "/media/");
        assert_eq!(config.banner_ttl_ms, 2000);
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.thumbnail_reload_ms, 1500);
    }

    #[test]
    fn test_video_url() {
        let config = GalleryConfig::default();
        assert_eq!(config.video_url("42"), "/videos/42/");

        let config = GalleryConfig {
            base_path: "/media/".to_string(),
            ..GalleryConfig::default()
        };
        assert_eq!(config.video_url("7"), "/media/7/");
    }
}
