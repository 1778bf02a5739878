//! Scroll-bottom detection and listener lifetime

use serde::{Deserialize, Serialize};

/// Pixel slack used by the default detection
pub const DEFAULT_BOTTOM_TOLERANCE: f64 = 1.0;

/// Viewport and document measurements at the time of a scroll event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// `window.innerHeight`
    pub viewport_height: f64,
    /// `document.documentElement.scrollTop`
    pub scroll_top: f64,
    /// `document.documentElement.offsetHeight`
    pub document_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BottomDetection {
    /// Viewport bottom must equal the document bottom exactly. Can miss on
    /// fractional scroll offsets (zoomed pages, high-DPI displays).
    Exact,
    /// Viewport bottom within this many pixels of the document bottom
    Tolerance(f64),
}

impl Default for BottomDetection {
    fn default() -> Self {
        BottomDetection::Tolerance(DEFAULT_BOTTOM_TOLERANCE)
    }
}

impl ScrollMetrics {
    pub fn viewport_bottom(&self) -> f64 {
        self.viewport_height + self.scroll_top
    }

    pub fn is_at_bottom(&self, detection: BottomDetection) -> bool {
        let bottom = self.viewport_bottom();
        match detection {
            BottomDetection::Exact => bottom == self.document_height,
            BottomDetection::Tolerance(px) => bottom >= self.document_height - px,
        }
    }
}

/// Holds an acquired listener and releases it exactly once, on
/// [`Subscription::release`] or on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn metrics(viewport_height: f64, scroll_top: f64, document_height: f64) -> ScrollMetrics {
        ScrollMetrics { viewport_height, scroll_top, document_height }
    }

    #[test]
    fn test_exact_bottom() {
        assert!(metrics(800.0, 1200.0, 2000.0).is_at_bottom(BottomDetection::Exact));
        assert!(!metrics(800.0, 1100.0, 2000.0).is_at_bottom(BottomDetection::Exact));
    }

    #[test]
    fn test_exact_misses_subpixel_offset() {
        let m = metrics(800.0, 1199.6, 2000.0);
        assert!(!m.is_at_bottom(BottomDetection::Exact));
        assert!(m.is_at_bottom(BottomDetection::default()));
    }

    #[test]
    fn test_tolerance_band() {
        let detection = BottomDetection::Tolerance(5.0);
        assert!(metrics(800.0, 1196.0, 2000.0).is_at_bottom(detection));
        assert!(!metrics(800.0, 1190.0, 2000.0).is_at_bottom(detection));
        // Overscroll past the end still counts
        assert!(metrics(800.0, 1250.0, 2000.0).is_at_bottom(detection));
    }

    #[test]
    fn test_short_document_is_at_bottom() {
        // Content shorter than the viewport
        assert!(metrics(800.0, 0.0, 600.0).is_at_bottom(BottomDetection::default()));
    }

    #[test]
    fn test_subscription_releases_on_drop() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert!(sub.is_active());
        drop(sub);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_releases_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        sub.release();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
