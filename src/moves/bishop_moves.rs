use crate::moves::move_descriptions::StepDirection;

pub const BISHOP_DIRECTIONS: [StepDirection; 4] = [
    StepDirection::either(1, 1),
    StepDirection::either(1, -1),
    StepDirection::either(-1, -1),
    StepDirection::either(-1, 1),
];
