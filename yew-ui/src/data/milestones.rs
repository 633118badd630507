// SPDX-License-Identifier: MIT OR Apache-2.0

//! Roadmap milestones, development phases and the long-term vision.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStatus {
    Completed,
    InProgress,
    Planned,
}

impl MilestoneStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "已完成",
            Self::InProgress => "进行中",
            Self::Planned => "计划中",
        }
    }

    /// CSS modifier.
    pub fn class(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestonePhase {
    Research,
    Development,
    Testing,
    Launch,
    Growth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// `YYYY-MM`.
    pub date: &'static str,
    pub status: MilestoneStatus,
    pub phase: MilestonePhase,
    /// 0-100.
    pub progress: u8,
    pub deliverables: &'static [&'static str],
    pub team: &'static [&'static str],
    /// 元.
    pub budget: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevelopmentPhase {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub milestones: &'static [&'static str],
    pub budget: u64,
    pub key_objectives: &'static [&'static str],
}

impl DevelopmentPhase {
    pub fn milestones(&self) -> impl Iterator<Item = &'static Milestone> + '_ {
        self.milestones
            .iter()
            .filter_map(|id| MILESTONES.iter().find(|m| m.id == *id))
    }

    /// Mean progress of the phase's milestones, 0-100.
    pub fn progress(&self) -> u8 {
        let (sum, count) = self
            .milestones()
            .fold((0u32, 0u32), |(sum, count), m| (sum + u32::from(m.progress), count + 1));
        if count == 0 {
            0
        } else {
            (f64::from(sum) / f64::from(count)).round() as u8
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub planned: usize,
    pub total_budget: u64,
    /// Completed share, rounded to the nearest percent.
    pub completion_rate: u32,
}

impl MilestoneStats {
    pub fn from_milestones(milestones: &[Milestone]) -> Self {
        let count = |status| milestones.iter().filter(|m| m.status == status).count();
        let total = milestones.len();
        let completed = count(MilestoneStatus::Completed);
        let completion_rate = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            total,
            completed,
            in_progress: count(MilestoneStatus::InProgress),
            planned: count(MilestoneStatus::Planned),
            total_budget: milestones.iter().filter_map(|m| m.budget).sum(),
            completion_rate,
        }
    }
}

pub fn milestone_stats() -> MilestoneStats {
    MilestoneStats::from_milestones(MILESTONES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisionGoal {
    pub title: &'static str,
    pub target: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FutureVision {
    pub title: &'static str,
    pub description: &'static str,
    pub goals: &'static [VisionGoal],
    pub timeline: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        id: "research-1",
        title: "市场调研完成",
        description: "完成目标用户调研、竞品分析和市场需求验证",
        date: "2024-01",
        status: MilestoneStatus::Completed,
        phase: MilestonePhase::Research,
        progress: 100,
        deliverables: &["用户调研报告", "竞品分析报告", "市场需求分析"],
        team: &["产品经理", "市场分析师", "UX研究员"],
        budget: None,
    },
    Milestone {
        id: "research-2",
        title: "技术架构设计",
        description: "完成AI模型选型、系统架构设计和技术栈确定",
        date: "2024-02",
        status: MilestoneStatus::Completed,
        phase: MilestonePhase::Research,
        progress: 100,
        deliverables: &["技术架构文档", "AI模型评估报告", "开发规范"],
        team: &["技术总监", "AI工程师", "架构师"],
        budget: None,
    },
    Milestone {
        id: "development-1",
        title: "MVP开发完成",
        description: "完成核心功能开发，包括基础AI对话和情绪识别",
        date: "2024-04",
        status: MilestoneStatus::Completed,
        phase: MilestonePhase::Development,
        progress: 100,
        deliverables: &["MVP产品", "核心算法", "基础UI界面"],
        team: &["前端工程师", "后端工程师", "AI工程师"],
        budget: Some(500_000),
    },
    Milestone {
        id: "development-2",
        title: "硬件原型开发",
        description: "完成智能硬件原型设计和制造",
        date: "2024-06",
        status: MilestoneStatus::InProgress,
        phase: MilestonePhase::Development,
        progress: 75,
        deliverables: &["硬件原型", "工业设计方案", "生产工艺文档"],
        team: &["硬件工程师", "工业设计师", "供应链经理"],
        budget: Some(800_000),
    },
    Milestone {
        id: "testing-1",
        title: "内测版本发布",
        description: "发布内测版本，收集用户反馈和数据",
        date: "2024-08",
        status: MilestoneStatus::InProgress,
        phase: MilestonePhase::Testing,
        progress: 30,
        deliverables: &["内测版本", "测试报告", "用户反馈分析"],
        team: &["测试工程师", "产品经理", "数据分析师"],
        budget: Some(300_000),
    },
    Milestone {
        id: "testing-2",
        title: "公测版本发布",
        description: "发布公测版本，扩大用户规模测试",
        date: "2024-10",
        status: MilestoneStatus::Planned,
        phase: MilestonePhase::Testing,
        progress: 0,
        deliverables: &["公测版本", "性能优化报告", "用户增长数据"],
        team: &["全体技术团队", "运营团队", "客服团队"],
        budget: Some(500_000),
    },
    Milestone {
        id: "launch-1",
        title: "正式版本发布",
        description: "发布正式版本，开始商业化运营",
        date: "2024-12",
        status: MilestoneStatus::Planned,
        phase: MilestonePhase::Launch,
        progress: 0,
        deliverables: &["正式版本", "营销方案", "商业化策略"],
        team: &["全体团队"],
        budget: Some(1_000_000),
    },
    Milestone {
        id: "growth-1",
        title: "用户规模突破10万",
        description: "实现用户规模突破，建立稳定的用户基础",
        date: "2025-03",
        status: MilestoneStatus::Planned,
        phase: MilestonePhase::Growth,
        progress: 0,
        deliverables: &["用户增长报告", "运营数据分析", "盈利模式验证"],
        team: &["运营团队", "市场团队", "数据团队"],
        budget: Some(1_500_000),
    },
    Milestone {
        id: "growth-2",
        title: "国际市场拓展",
        description: "进入海外市场，实现国际化发展",
        date: "2025-06",
        status: MilestoneStatus::Planned,
        phase: MilestonePhase::Growth,
        progress: 0,
        deliverables: &["国际版本", "本地化方案", "海外合作协议"],
        team: &["国际化团队", "商务团队", "本地化团队"],
        budget: Some(2_000_000),
    },
];

pub const DEVELOPMENT_PHASES: &[DevelopmentPhase] = &[
    DevelopmentPhase {
        id: "phase-1",
        name: "研究验证阶段",
        description: "市场调研、技术验证和产品定义",
        duration: "3个月",
        milestones: &["research-1", "research-2"],
        budget: 200_000,
        key_objectives: &[
            "验证市场需求和用户痛点",
            "确定技术可行性和架构方案",
            "完成产品定义和规划",
        ],
    },
    DevelopmentPhase {
        id: "phase-2",
        name: "产品开发阶段",
        description: "核心功能开发和硬件原型制造",
        duration: "6个月",
        milestones: &["development-1", "development-2"],
        budget: 1_300_000,
        key_objectives: &["完成MVP产品开发", "实现核心AI算法", "完成硬件原型设计"],
    },
    DevelopmentPhase {
        id: "phase-3",
        name: "测试优化阶段",
        description: "产品测试、用户反馈收集和优化迭代",
        duration: "4个月",
        milestones: &["testing-1", "testing-2"],
        budget: 800_000,
        key_objectives: &[
            "验证产品功能和用户体验",
            "收集用户反馈并优化",
            "准备商业化运营",
        ],
    },
    DevelopmentPhase {
        id: "phase-4",
        name: "商业化阶段",
        description: "正式发布和商业化运营",
        duration: "3个月",
        milestones: &["launch-1"],
        budget: 1_000_000,
        key_objectives: &["正式发布产品", "建立商业化模式", "实现初期盈利"],
    },
    DevelopmentPhase {
        id: "phase-5",
        name: "规模化阶段",
        description: "用户增长和市场扩张",
        duration: "12个月",
        milestones: &["growth-1", "growth-2"],
        budget: 3_500_000,
        key_objectives: &["实现用户规模突破", "拓展国际市场", "建立行业领先地位"],
    },
];

pub const FUTURE_VISION: FutureVision = FutureVision {
    title: "未来愿景",
    description: "成为全球领先的AI情绪伙伴平台",
    goals: &[
        VisionGoal {
            title: "用户规模",
            target: "1000万+",
            description: "服务全球千万用户的情绪健康需求",
        },
        VisionGoal {
            title: "技术领先",
            target: "行业第一",
            description: "在AI情绪识别和陪伴技术方面保持领先",
        },
        VisionGoal {
            title: "生态建设",
            target: "完整生态",
            description: "构建包含硬件、软件、服务的完整生态系统",
        },
        VisionGoal {
            title: "社会价值",
            target: "积极影响",
            description: "为改善全球心理健康状况做出积极贡献",
        },
    ],
    timeline: "2025-2030年",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_over_the_roadmap() {
        let stats = milestone_stats();
        assert_eq!(stats.total, 9);
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.planned, 4);
        assert_eq!(stats.total_budget, 6_600_000);
        // 3 / 9 = 33.3%
        assert_eq!(stats.completion_rate, 33);
    }

    #[test]
    fn stats_of_nothing() {
        let stats = MilestoneStats::from_milestones(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.total_budget, 0);
    }

    #[test]
    fn every_phase_references_known_milestones() {
        for phase in DEVELOPMENT_PHASES {
            assert_eq!(
                phase.milestones().count(),
                phase.milestones.len(),
                "{} references an unknown milestone",
                phase.id
            );
        }
    }

    #[test]
    fn phase_progress_is_the_mean_of_its_milestones() {
        assert_eq!(DEVELOPMENT_PHASES[0].progress(), 100);
        // (100 + 75) / 2
        assert_eq!(DEVELOPMENT_PHASES[1].progress(), 88);
        assert_eq!(DEVELOPMENT_PHASES[4].progress(), 0);
    }
}
