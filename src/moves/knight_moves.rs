use crate::moves::move_descriptions::StepDirection;

pub const KNIGHT_DIRECTIONS: [StepDirection; 8] = [
    StepDirection::either(1, 2),
    StepDirection::either(2, 1),
    StepDirection::either(2, -1),
    StepDirection::either(1, -2),
    StepDirection::either(-1, -2),
    StepDirection::either(-2, -1),
    StepDirection::either(-2, 1),
    StepDirection::either(-1, 2),
];
