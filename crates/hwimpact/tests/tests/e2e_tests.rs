#[path = "e2e/ram_manufacture.rs"]
mod ram_manufacture;

#[path = "e2e/ram_use_phase.rs"]
mod ram_use_phase;

#[path = "e2e/gpu_lifecycle.rs"]
mod gpu_lifecycle;

#[path = "e2e/reference_loading.rs"]
mod reference_loading;
