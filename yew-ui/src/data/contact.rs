// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::icons::IconKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: IconKind,
    pub title: &'static str,
    pub content: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamContact {
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub expertise: &'static str,
}

impl TeamContact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

pub const CONTACT_EMAIL: &str = "contact@mulfin.ai";
pub const HOTLINE: &str = "+8640012345678";

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: IconKind::Mail,
        title: "邮箱联系",
        content: CONTACT_EMAIL,
        description: "商务合作与投资咨询",
    },
    ContactChannel {
        icon: IconKind::Phone,
        title: "电话咨询",
        content: "+86 400-123-4567",
        description: "工作日 9:00-18:00",
    },
    ContactChannel {
        icon: IconKind::MapPin,
        title: "公司地址",
        content: "北京市海淀区中关村软件园",
        description: "欢迎预约实地参观",
    },
];

pub const INVESTOR_TYPES: &[&str] = &[
    "天使投资人",
    "VC机构",
    "PE机构",
    "产业基金",
    "战略投资者",
    "政府基金",
    "家族办公室",
    "其他",
];

pub const TEAM_CONTACTS: &[TeamContact] = &[
    TeamContact {
        name: "张伟",
        role: "CEO & 创始人",
        email: "zhang.wei@mulfin.ai",
        phone: "+86 138-0013-8001",
        expertise: "战略规划、融资对接",
    },
    TeamContact {
        name: "李明",
        role: "CTO & 联合创始人",
        email: "li.ming@mulfin.ai",
        phone: "+86 138-0013-8002",
        expertise: "技术架构、产品开发",
    },
    TeamContact {
        name: "王芳",
        role: "CFO",
        email: "wang.fang@mulfin.ai",
        phone: "+86 138-0013-8003",
        expertise: "财务管理、投资者关系",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links() {
        assert_eq!(TEAM_CONTACTS[0].mailto(), "mailto:zhang.wei@mulfin.ai");
        assert_eq!(TEAM_CONTACTS[2].tel(), "tel:+86 138-0013-8003");
    }
}
