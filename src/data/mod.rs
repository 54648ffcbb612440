pub mod depth;
pub mod stack;
pub mod tab;
