//! Position Verification Value Objects

mod accounting_model;
mod expected_shape;
mod position_group;
mod position_leg;

pub use accounting_model::AccountingModelTag;
pub use expected_shape::ExpectedShape;
pub use position_group::PositionGroup;
pub use position_leg::PositionLeg;
