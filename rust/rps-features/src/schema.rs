//! Feature schema v1.
//!
//! The classifier consumes a flat vector of landmark coordinates. Slots follow
//! the byte-wise lexicographic order of the joint names below; the enum is
//! declared in that order so `joint as usize` is the joint's slot.
//!
//! ### Layout (v1)
//! For joint `k` in [`HandJoint::ALL`]: `out[2k] = x`, `out[2k + 1] = y`.
//!
//! Total: FEATURE_LEN = 42.

/// Increment this whenever the feature layout changes.
pub const FEATURE_SCHEMA_ID: u32 = 1;

/// Number of tracked hand joints.
pub const JOINT_COUNT: usize = 21;

/// Feature vector length for schema v1.
pub const FEATURE_LEN: usize = 2 * JOINT_COUNT;

/// Tracked hand joints, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandJoint {
    IndexDip,
    IndexMcp,
    IndexPip,
    IndexTip,
    MiddleDip,
    MiddleMcp,
    MiddlePip,
    MiddleTip,
    PinkyDip,
    PinkyMcp,
    PinkyPip,
    PinkyTip,
    RingDip,
    RingMcp,
    RingPip,
    RingTip,
    ThumbCmc,
    ThumbIp,
    ThumbMp,
    ThumbTip,
    Wrist,
}

impl HandJoint {
    /// All joints in slot order.
    pub const ALL: [HandJoint; JOINT_COUNT] = [
        Self::IndexDip,
        Self::IndexMcp,
        Self::IndexPip,
        Self::IndexTip,
        Self::MiddleDip,
        Self::MiddleMcp,
        Self::MiddlePip,
        Self::MiddleTip,
        Self::PinkyDip,
        Self::PinkyMcp,
        Self::PinkyPip,
        Self::PinkyTip,
        Self::RingDip,
        Self::RingMcp,
        Self::RingPip,
        Self::RingTip,
        Self::ThumbCmc,
        Self::ThumbIp,
        Self::ThumbMp,
        Self::ThumbTip,
        Self::Wrist,
    ];

    /// Joint index (0..JOINT_COUNT); the (x, y) pair lives at `2 * index`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Canonical name. Slot order is the sort order of these strings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IndexDip => "indexDIP",
            Self::IndexMcp => "indexMCP",
            Self::IndexPip => "indexPIP",
            Self::IndexTip => "indexTip",
            Self::MiddleDip => "middleDIP",
            Self::MiddleMcp => "middleMCP",
            Self::MiddlePip => "middlePIP",
            Self::MiddleTip => "middleTip",
            Self::PinkyDip => "pinkyDIP",
            Self::PinkyMcp => "pinkyMCP",
            Self::PinkyPip => "pinkyPIP",
            Self::PinkyTip => "pinkyTip",
            Self::RingDip => "ringDIP",
            Self::RingMcp => "ringMCP",
            Self::RingPip => "ringPIP",
            Self::RingTip => "ringTip",
            Self::ThumbCmc => "thumbCMC",
            Self::ThumbIp => "thumbIP",
            Self::ThumbMp => "thumbMP",
            Self::ThumbTip => "thumbTip",
            Self::Wrist => "wrist",
        }
    }

    /// Raw joint key reported by the hand-pose capture framework.
    pub fn capture_key(&self) -> &'static str {
        match self {
            Self::IndexDip => "VNHLKIDIP",
            Self::IndexMcp => "VNHLKIMCP",
            Self::IndexPip => "VNHLKIPIP",
            Self::IndexTip => "VNHLKITIP",
            Self::MiddleDip => "VNHLKMDIP",
            Self::MiddleMcp => "VNHLKMMCP",
            Self::MiddlePip => "VNHLKMIP",
            Self::MiddleTip => "VNHLKMTIP",
            Self::PinkyDip => "VNHLKPDIP",
            Self::PinkyMcp => "VNHLKPMCP",
            Self::PinkyPip => "VNHLKPPIP",
            Self::PinkyTip => "VNHLKPTIP",
            Self::RingDip => "VNHLKRDIP",
            Self::RingMcp => "VNHLKRMCP",
            Self::RingPip => "VNHLKRPIP",
            Self::RingTip => "VNHLKRTIP",
            Self::ThumbCmc => "VNHLKTCMC",
            Self::ThumbIp => "VNHLKTIP",
            Self::ThumbMp => "VNHLKTMP",
            Self::ThumbTip => "VNHLKTTIP",
            Self::Wrist => "VNHLKWRI",
        }
    }

    /// Look up a joint by canonical name or capture key (both exact).
    pub fn from_name(name: &str) -> Option<HandJoint> {
        Self::ALL
            .into_iter()
            .find(|j| j.name() == name || j.capture_key() == name)
    }
}
