/// CPU rasterization of the cloud scene, powered by `vello_cpu`.
pub mod cpu;
