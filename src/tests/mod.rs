//! 单元测试模块
//! 覆盖渲染引擎、回退、Column 渲染、布局、模型解析、宿主配置和资源解析

pub mod engine_tests;
pub mod component_tests;
pub mod resource_tests;
