//! # OSD Elements
//!
//! Identifiers for every OSD element the configurator knows about. Names follow
//! the `osd_<name>_pos` keys of the `set osd` dump without prefix and suffix.

use std::fmt;
use std::str::FromStr;

use crate::error::OsdError;

macro_rules! osd_elements {
    ($($variant:ident => $key:literal,)+) => {
        /// OSD element identifier
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ElementId {
            $($variant,)+
        }

        impl ElementId {
            /// Every element, in configurator order
            pub const ALL: &'static [ElementId] = &[$(ElementId::$variant,)+];

            /// Config key, e.g. `rssi_value`
            pub const fn key(self) -> &'static str {
                match self {
                    $(ElementId::$variant => $key,)+
                }
            }
        }
    };
}

osd_elements! {
    AvgCellVoltage => "avg_cell_voltage",
    PitchAngle => "pitch_angle",
    RollAngle => "roll_angle",
    Crosshairs => "crosshairs",
    RssiValue => "rssi_value",
    HomeDir => "home_dir",
    HomeDist => "home_dist",
    MainBattVoltage => "main_batt_voltage",
    GpsSpeed => "gps_speed",
    GpsLat => "gps_lat",
    GpsLon => "gps_lon",
    DisplayName => "display_name",
    Flymode => "flymode",
    CraftName => "craft_name",
    CurrentDraw => "current_draw",
    MahDrawn => "mah_drawn",
    GpsSats => "gps_sats",
    Altitude => "altitude",
    NumericalVario => "numerical_vario",
    ThrottlePos => "throttle_pos",
    VtxChannel => "vtx_channel",
    RollPids => "roll_pids",
    PitchPids => "pitch_pids",
    YawPids => "yaw_pids",
    Power => "power",
    PidrateProfile => "pidrate_profile",
    Warnings => "warnings",
    Debug => "debug",
    ArtificialHorizon => "artificial_horizon",
    HorizonSidebars => "horizon_sidebars",
    ItemTimer1 => "item_timer_1",
    ItemTimer2 => "item_timer_2",
    MainBattUsage => "main_batt_usage",
    Disarmed => "disarmed",
    NumericalHeading => "numerical_heading",
    CompassBar => "compass_bar",
    EscTmp => "esc_tmp",
    EscRpm => "esc_rpm",
    RemainingTimeEstimate => "remaining_time_estimate",
    RtcDatetime => "rtc_datetime",
    AdjustmentRange => "adjustment_range",
    CoreTemperature => "core_temperature",
    AntiGravity => "anti_gravity",
    GForce => "g_force",
    MotorDiag => "motor_diag",
    LogStatus => "log_status",
    FlipArrow => "flip_arrow",
    LinkQuality => "link_quality",
    FlightDist => "flight_dist",
    StickOverlayLeft => "stick_overlay_left",
    StickOverlayRight => "stick_overlay_right",
    EscRpmFreq => "esc_rpm_freq",
    RateProfileName => "rate_profile_name",
    PidProfileName => "pid_profile_name",
    ProfileName => "profile_name",
    RssiDbmValue => "rssi_dbm_value",
    RcChannels => "rc_channels",
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ElementId {
    type Err = OsdError;

    /// Accepts exactly two spellings: the bare key (`gps_sats`) or the full
    /// configurator name (`osd_gps_sats_pos`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let configurator_key = trimmed
            .strip_prefix("osd_")
            .and_then(|key| key.strip_suffix("_pos"));

        // `throttle_pos` is a bare key that itself ends in `_pos`
        std::iter::once(trimmed)
            .chain(configurator_key)
            .find_map(|key| ElementId::ALL.iter().copied().find(|e| e.key() == key))
            .ok_or_else(|| OsdError::UnknownElement(s.to_string()))
    }
}
