//! Compiled-in option catalogs for the select fields.

/// A camera movement choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraMovementOption {
    /// Machine value stored in the form. Empty means no movement selected.
    pub value: &'static str,
    /// Indonesian label.
    pub label_localized: &'static str,
    /// English label.
    pub label_common: &'static str,
}

/// An aspect ratio choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatioOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Aspect ratio used when the form does not name one.
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

pub static ASPECT_RATIOS: [AspectRatioOption; 6] = [
    AspectRatioOption { value: "16:9", label: "16:9 (Landscape / YouTube)" },
    AspectRatioOption { value: "9:16", label: "9:16 (Portrait / Reels, TikTok)" },
    AspectRatioOption { value: "1:1", label: "1:1 (Square / Instagram)" },
    AspectRatioOption { value: "4:3", label: "4:3 (Standard)" },
    AspectRatioOption { value: "3:4", label: "3:4 (Portrait Standard)" },
    AspectRatioOption { value: "21:9", label: "21:9 (Cinematic Widescreen)" },
];

pub static CAMERA_MOVEMENTS: [CameraMovementOption; 16] = [
    CameraMovementOption {
        value: "",
        label_localized: "Pilih Gerakan Kamera (Opsional)",
        label_common: "Select Camera Movement (Optional)",
    },
    CameraMovementOption {
        value: "static",
        label_localized: "Statis (Kamera Diam)",
        label_common: "Static Shot",
    },
    CameraMovementOption {
        value: "pan_left",
        label_localized: "Pan ke Kiri",
        label_common: "Pan Left",
    },
    CameraMovementOption {
        value: "pan_right",
        label_localized: "Pan ke Kanan",
        label_common: "Pan Right",
    },
    CameraMovementOption {
        value: "tilt_up",
        label_localized: "Tilt ke Atas",
        label_common: "Tilt Up",
    },
    CameraMovementOption {
        value: "tilt_down",
        label_localized: "Tilt ke Bawah",
        label_common: "Tilt Down",
    },
    CameraMovementOption {
        value: "dolly_in",
        label_localized: "Dolly Masuk (Mendekat)",
        label_common: "Dolly In",
    },
    CameraMovementOption {
        value: "dolly_out",
        label_localized: "Dolly Keluar (Menjauh)",
        label_common: "Dolly Out",
    },
    CameraMovementOption {
        value: "zoom_in",
        label_localized: "Zoom Masuk",
        label_common: "Zoom In",
    },
    CameraMovementOption {
        value: "zoom_out",
        label_localized: "Zoom Keluar",
        label_common: "Zoom Out",
    },
    CameraMovementOption {
        value: "tracking",
        label_localized: "Tracking (Mengikuti Subjek)",
        label_common: "Tracking Shot",
    },
    CameraMovementOption {
        value: "crane_up",
        label_localized: "Crane Naik",
        label_common: "Crane Up",
    },
    CameraMovementOption {
        value: "orbit",
        label_localized: "Orbit (Mengelilingi Subjek)",
        label_common: "Orbit Shot",
    },
    CameraMovementOption {
        value: "handheld",
        label_localized: "Handheld (Genggam, Sedikit Goyang)",
        label_common: "Handheld Shot",
    },
    CameraMovementOption {
        value: "drone",
        label_localized: "Drone (Pengambilan dari Udara)",
        label_common: "Drone Shot",
    },
    CameraMovementOption {
        value: "pov",
        label_localized: "Sudut Pandang Orang Pertama (POV)",
        label_common: "POV Shot",
    },
];

/// Look up a camera movement by its machine value.
pub fn find_camera_movement(value: &str) -> Option<&'static CameraMovementOption> {
    CAMERA_MOVEMENTS.iter().find(|option| option.value == value)
}

/// Look up an aspect ratio by its machine value.
pub fn find_aspect_ratio(value: &str) -> Option<&'static AspectRatioOption> {
    ASPECT_RATIOS.iter().find(|option| option.value == value)
}
