pub mod codegen_controller;
pub mod system_controller;
