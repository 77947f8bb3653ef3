//! The director's guide shown by `cinema guide`.

/// One numbered step of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSection {
    /// Heading
    pub title: &'static str,
    /// Advice
    pub body: &'static str,
}

/// Shooting advice, in the order a shot is set up.
pub const SHOOTING_GUIDE: &[GuideSection] = &[
    GuideSection {
        title: "Cine Hardware Selection",
        body: "Pick a camera body to set the color science and dynamic range. \
               ARRI for emotional color, RED for razor-sharp 8K imagery.",
    },
    GuideSection {
        title: "Optical Glass System",
        body: "Pick a lens to shape texture and bokeh. Cooke feels warm; \
               Panavision C brings classic anamorphic character with blue horizontal flares.",
    },
    GuideSection {
        title: "Perspective & Focal Length",
        body: "Focal length decides the view. 8mm is panorama, 12mm ultra-wide, 18mm wide, \
               25-35mm a medium shot, 50-85mm a half-body portrait and 100-135mm a close-up.",
    },
    GuideSection {
        title: "Camera Angle",
        body: "The angle sets the emotion of the shot. Choose a preset angle or add your own \
               camera position with --custom-angle; --no-angle leaves the angle to the model.",
    },
];
