// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::icons::IconKind;
use crate::data::product::Feature;

pub const SOLUTION_FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Heart,
        title: "AI情感陪伴",
        description: "基于先进AI技术，提供24/7全天候情感支持和陪伴",
        items: &["智能情感识别", "个性化对话", "情绪调节指导"],
    },
    Feature {
        icon: IconKind::Zap,
        title: "智能硬件集成",
        description: "结合可爱的硬件形态，提供触觉和视觉的真实陪伴体验",
        items: &["触感反馈", "表情显示", "语音交互"],
    },
    Feature {
        icon: IconKind::Shield,
        title: "隐私安全保护",
        description: "采用端到端加密，确保用户隐私和情感数据安全",
        items: &["本地处理", "数据加密", "隐私保护"],
    },
    Feature {
        icon: IconKind::Clock,
        title: "全时段可用",
        description: "不受时间和地点限制，随时随地提供情感支持",
        items: &["24/7在线", "即时响应", "无地域限制"],
    },
];

pub const VISION_POINTS: &[&str] = &[
    "智能情感识别与响应",
    "个性化陪伴体验",
    "全方位心理健康支持",
    "可爱的硬件交互形态",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advantage {
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    /// Accent class for the figure.
    pub tone: &'static str,
}

pub const ADVANTAGES: &[Advantage] = &[
    Advantage {
        title: "成本效益",
        description: "相比传统心理咨询，成本降低80%以上",
        value: "80%+",
        tone: "tone-green",
    },
    Advantage {
        title: "可及性",
        description: "24/7全天候服务，无需预约等待",
        value: "24/7",
        tone: "tone-blue",
    },
    Advantage {
        title: "个性化",
        description: "基于用户数据提供定制化情感支持",
        value: "100%",
        tone: "tone-orange",
    },
    Advantage {
        title: "隐私性",
        description: "无需面对面交流，保护用户隐私",
        value: "完全",
        tone: "tone-purple",
    },
];
