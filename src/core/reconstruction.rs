//=========================================================================
// Reconstruction Data
//=========================================================================
//
// Plain aggregates for a multi-view reconstruction in the COLMAP model
// layout (https://colmap.github.io/format.html): cameras (intrinsics),
// views (registered images with pose), and sparse 3D points.
//
// These types carry data only. Loading, projection and pose math live
// elsewhere.
//
//=========================================================================

//=== Point3D =============================================================

/// Triangulated scene point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    /// `u32::MAX` marks an unassigned id.
    pub id: u32,
    pub position: [f32; 3],
    pub color: [u8; 3],
    /// Mean reprojection error in pixels.
    pub error: f32,
}

impl Default for Point3D {
    fn default() -> Self {
        Self {
            id: u32::MAX,
            position: [0.0; 3],
            color: [0; 3],
            error: 0.0,
        }
    }
}

//=== PinholeCamera =======================================================

/// Pinhole intrinsics shared by one or more views.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinholeCamera {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pub focal: [f32; 2],
    pub principal_point: [f32; 2],
}

//=== CameraView ==========================================================

/// One registered image: world-to-camera rotation (quaternion `w, x, y, z`)
/// and translation, plus the intrinsics it was captured with.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraView {
    pub id: u32,
    pub camera_id: u32,
    pub rotation: [f32; 4],
    pub translation: [f32; 3],
    pub name: String,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            id: 0,
            camera_id: 0,
            rotation: [1.0, 0.0, 0.0, 0.0],
            translation: [0.0; 3],
            name: String::new(),
        }
    }
}

//=== Reconstruction ======================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconstruction {
    pub cameras: Vec<PinholeCamera>,
    pub views: Vec<CameraView>,
    pub points: Vec<Point3D>,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_point_has_unassigned_id() {
        assert_eq!(Point3D::default().id, u32::MAX);
    }

    #[test]
    fn default_view_has_identity_rotation() {
        assert_eq!(CameraView::default().rotation, [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn default_reconstruction_holds_nothing() {
        let recon = Reconstruction::default();
        assert!(recon.cameras.is_empty());
        assert!(recon.views.is_empty());
        assert!(recon.points.is_empty());
    }
}
