use crate::moves::move_descriptions::StepDirection;

pub const ROOK_DIRECTIONS: [StepDirection; 4] = [
    StepDirection::either(0, 1),
    StepDirection::either(1, 0),
    StepDirection::either(0, -1),
    StepDirection::either(-1, 0),
];
