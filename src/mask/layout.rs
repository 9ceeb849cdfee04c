use crate::geometry::{Orientation, Sizes};
use crate::Result;

use super::region::{Boundary, Region};

/// A photomask: an ordered region list inside a pitch boundary.
///
/// Construction re-expresses everything relative to the boundary center and
/// forces every region clockwise, which is what the diffraction integrals
/// assume.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    boundary: Boundary,
    regions: Vec<Region>,
    sizes: Sizes,
}

impl Mask {
    pub fn new(regions: Vec<Region>, boundary: Boundary) -> Result<Self> {
        let center = boundary.center();

        let mut centered_regions = Vec::with_capacity(regions.len());
        for mut region in regions {
            region.polygon_mut().set_bypass(Orientation::Cw);
            region.polygon_mut().translate(center);
            centered_regions.push(region);
        }

        let lb = boundary.rect().left_bottom() - center;
        let rt = boundary.rect().right_top() - center;
        let boundary = Boundary::new(lb, rt, boundary.transmittance(), boundary.phase());
        let sizes = boundary.sizes();

        Ok(Mask {
            boundary,
            regions: centered_regions,
            sizes,
        })
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Spatial period of the mask along x and y.
    pub fn pitch(&self) -> Sizes {
        self.sizes
    }

    pub fn is_opaque(&self) -> bool {
        self.boundary.transmittance() == 0.0
    }

    pub fn is_clear(&self) -> bool {
        !self.is_opaque()
    }

    /// Zero extent in both axes: nothing to diffract.
    pub fn is_bad(&self) -> bool {
        self.sizes.x == 0.0 && self.sizes.y == 0.0
    }

    pub fn is_1d(&self) -> bool {
        self.sizes.x == 0.0 || self.sizes.y == 0.0
    }
}
