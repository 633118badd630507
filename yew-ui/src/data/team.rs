// SPDX-License-Identifier: MIT OR Apache-2.0

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub skills: &'static [&'static str],
}

impl TeamMember {
    /// First character of the name, shown in place of a photo.
    pub fn initial(&self) -> String {
        self.name.chars().take(1).collect()
    }
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        id: "1",
        name: "李明",
        position: "CEO & 创始人",
        role: "CEO",
        bio: "前腾讯AI产品总监，10年人工智能产品经验，专注于情感计算和人机交互领域",
        skills: &["产品战略", "AI产品", "团队管理", "融资经验"],
    },
    TeamMember {
        id: "2",
        name: "王雪",
        position: "CTO & 联合创始人",
        role: "CTO",
        bio: "前字节跳动算法专家，清华大学计算机博士，在机器学习和自然语言处理领域有深厚造诣",
        skills: &["机器学习", "NLP", "系统架构", "技术管理"],
    },
    TeamMember {
        id: "3",
        name: "张伟",
        position: "硬件总监",
        role: "硬件总监",
        bio: "前小米硬件工程师，15年消费电子产品开发经验，擅长智能硬件设计和制造",
        skills: &["硬件设计", "产品制造", "供应链管理", "质量控制"],
    },
    TeamMember {
        id: "4",
        name: "陈思",
        position: "设计总监",
        role: "设计总监",
        bio: "前苹果设计师，专注于用户体验和工业设计，曾参与多款获奖产品设计",
        skills: &["UI/UX设计", "工业设计", "用户研究", "品牌设计"],
    },
];

/// One column of the org chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub name: &'static str,
    pub lead: Option<&'static TeamMember>,
    /// Members other than the lead.
    pub members: Vec<&'static TeamMember>,
}

fn find(keyword: &str) -> Option<&'static TeamMember> {
    TEAM.iter().find(|m| m.position.contains(keyword))
}

pub fn ceo() -> Option<&'static TeamMember> {
    find("CEO")
}

/// Departments under the CEO. Membership is decided by position keywords,
/// so a department may be empty while it is still being staffed.
pub fn departments() -> Vec<Department> {
    const LAYOUT: [(&str, &str, [&str; 2]); 3] = [
        ("技术团队", "CTO", ["技术", "CTO"]),
        ("产品团队", "产品", ["产品", "设计"]),
        ("运营团队", "运营", ["运营", "市场"]),
    ];
    LAYOUT
        .iter()
        .map(|(name, lead_keyword, member_keywords)| {
            let lead = find(lead_keyword);
            let members = TEAM
                .iter()
                .filter(|m| member_keywords.iter().any(|k| m.position.contains(*k)))
                .filter(|m| lead.map_or(true, |lead| lead.id != m.id))
                .collect();
            Department {
                name: *name,
                lead,
                members,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn org_chart_places_leads_and_members() {
        assert_eq!(ceo().map(|m| m.name), Some("李明"));

        let departments = departments();
        let names: Vec<_> = departments.iter().map(|d| d.name).collect();
        assert_eq!(names, ["技术团队", "产品团队", "运营团队"]);

        let tech = &departments[0];
        assert_eq!(tech.lead.map(|m| m.name), Some("王雪"));
        assert!(tech.members.is_empty(), "the lead is not listed twice");

        let product = &departments[1];
        assert_eq!(product.lead, None);
        assert_eq!(product.members.iter().map(|m| m.name).collect::<Vec<_>>(), ["陈思"]);

        assert!(departments[2].lead.is_none() && departments[2].members.is_empty());
    }

    #[test]
    fn initials_are_one_character() {
        assert_eq!(TEAM[0].initial(), "李");
    }
}
