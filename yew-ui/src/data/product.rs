// SPDX-License-Identifier: MIT OR Apache-2.0

//! Product features, specs and carousel images.

use crate::components::icons::IconKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    /// Specs for hardware, capabilities for software.
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductImage {
    pub url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HARDWARE_FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Heart,
        title: "情感感知系统",
        description: "内置多传感器阵列，实时感知用户情绪状态",
        items: &["心率检测", "语音情感分析", "面部表情识别", "环境感知"],
    },
    Feature {
        icon: IconKind::Eye,
        title: "智能显示屏",
        description: "高清OLED显示屏，展现丰富的表情和交互界面",
        items: &["3.5英寸OLED", "1080P分辨率", "触控支持", "护眼模式"],
    },
    Feature {
        icon: IconKind::Mic,
        title: "语音交互系统",
        description: "先进的语音识别和合成技术，自然对话体验",
        items: &["360°拾音", "降噪处理", "多语言支持", "情感语调"],
    },
    Feature {
        icon: IconKind::Zap,
        title: "触感反馈",
        description: "柔软的触感材质和震动反馈，提供真实的陪伴感受",
        items: &["柔软外壳", "温度调节", "震动反馈", "压力感应"],
    },
];

pub const SOFTWARE_FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Cpu,
        title: "AI情感引擎",
        description: "基于深度学习的情感理解和响应系统",
        items: &["情绪识别", "个性化学习", "智能对话", "情感建模"],
    },
    Feature {
        icon: IconKind::Smartphone,
        title: "移动应用生态",
        description: "配套移动应用，扩展更多功能和服务",
        items: &["远程控制", "数据同步", "社区功能", "健康报告"],
    },
    Feature {
        icon: IconKind::Cloud,
        title: "云端服务",
        description: "云端AI服务和数据备份，持续优化体验",
        items: &["云端AI", "数据备份", "远程更新", "跨设备同步"],
    },
    Feature {
        icon: IconKind::Shield,
        title: "隐私保护",
        description: "端到端加密和本地处理，保护用户隐私",
        items: &["本地AI", "数据加密", "隐私模式", "安全认证"],
    },
];

pub const PRODUCT_IMAGES: &[ProductImage] = &[
    ProductImage {
        url: "/molfin.avif",
        title: "Mulfin产品展示",
        description: "Mulfin AI情感伙伴的真实产品照片",
    },
    ProductImage {
        url: "/molfin",
        title: "Mulfin产品细节",
        description: "Mulfin产品的详细展示",
    },
];

/// (label, value) rows of the spec sheet.
pub const SPECS: &[(&str, &str)] = &[
    ("尺寸", "15 × 12 × 8 cm"),
    ("重量", "350g"),
    ("电池续航", "12小时"),
    ("充电时间", "2小时"),
    ("连接方式", "WiFi + 蓝牙"),
    ("操作系统", "MulfinOS 1.0"),
];

pub const CORE_FUNCTIONS: &[&str] = &[
    "情感识别", "语音交互", "触感反馈", "表情显示", "健康监测", "音乐播放", "提醒功能", "学习能力",
];

/// (value, caption) figures in the closing banner.
pub const HEADLINE_FIGURES: &[(&str, &str)] = &[
    ("99.5%", "情感识别准确率"),
    ("<100ms", "响应延迟"),
    ("24/7", "全天候陪伴"),
];
