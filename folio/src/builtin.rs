//! The content shipped with the page.

use std::sync::LazyLock;

use crate::content::{
    Banner, Contact, Journey, Milestone, MilestoneDetail, Portfolio, Profile, ProgressItem,
    Project, SkillGroup, SkillLevel,
};

static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(build);

/// Built-in portfolio content, shared read-only.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill_group(icon: &str, title: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        icon: icon.to_string(),
        title: title.to_string(),
        items: strings(items),
    }
}

fn skill_level(title: &str, text: &str) -> SkillLevel {
    SkillLevel {
        title: title.to_string(),
        text: text.to_string(),
    }
}

fn progress(title: &str, value: &str) -> ProgressItem {
    ProgressItem {
        title: title.to_string(),
        value: value.to_string(),
    }
}

fn project(title: &str, content: &str, image: &str, href: &str) -> Project {
    Project {
        title: title.to_string(),
        content: content.to_string(),
        image: image.to_string(),
        href: href.to_string(),
    }
}

fn build() -> Portfolio {
    Portfolio {
        page1: Banner {
            title_en: "Hello,I`m Minjer".to_string(),
            title: "永远在路上".to_string(),
        },
        page2: Profile {
            author_img: "page1.jpg".to_string(),
            greeting: "后端工程师一枚，电子信息专业大三在读。".to_string(),
            job_intent: "后端开发".to_string(),
            about: "掌握Java进行web应用开发，能够使用MySQL、Redis等主流数据库，  有一定的项目实战经验。希望可以和大家一起学习，共同进步！".to_string(),
        },
        page3: vec![
            skill_group("icon-diannao", "开发语言", &["Java", "Python"]),
            skill_group(
                "icon-qianbi1",
                "数据库",
                &["MySQL", "Redis", "SQLite", "MongoDB"],
            ),
            skill_group(
                "icon-shouji",
                "框架/中间件",
                &["SpringBoot", "SpringCloud", "Mybatis", "RabbitMQ"],
            ),
            skill_group(
                "icon-tubiao-",
                "其余技能",
                &["git", "markdown", "docker", "Linux"],
            ),
        ],
        page4: Journey {
            course: vec![Milestone {
                date: "2021/9——至今".to_string(),
                desc: MilestoneDetail {
                    title: "华中科技大学".to_string(),
                    list: strings(&["Spring框架学习", "Emoprobe后端开发", "深入学习数据库"]),
                },
            }],
            single_list: vec![
                skill_level("vue", "了解"),
                skill_level("Java", "掌握"),
                skill_level("Python", "了解"),
                skill_level("SpringBoot", "掌握"),
            ],
            progress_list: vec![
                progress("Java", "90%"),
                progress("SpringBoot", "80%"),
                progress("MySQL", "80%"),
                progress("Redis", "60%"),
                progress("RabbitMQ", "60%"),
                progress("Mybatis", "70%"),
            ],
        },
        page5: vec![
            project(
                "Emoprobe情感分析系统",
                "进行后端开发，使用SpringBoot框架，MySQL数据库，Redis缓存，进行情感分析",
                "poj1.png",
                "https://github.com/pxxxl/Emoprobe",
            ),
            project(
                "局域网聊天室",
                "有GUI界面的局域网聊天室，支持群聊，私聊，匿名聊天",
                "poj2.png",
                "https://github.com/mj3622/MomoTalk",
            ),
            project(
                "AutoArchive",
                "实现游戏《Blue Archive》的自动化操作，包括自动刷图，自动购买道具，自动领取奖励等",
                "poj3.png",
                "https://github.com/mj3622/AutoArchive",
            ),
            project(
                "Mist-Forum论坛项目",
                "基于Spring Cloud的分布式论坛项目，含有用户端和管理端，实现了用户注册、登录、发帖、评论、点赞等功能",
                "poj4.png",
                "https://github.com/mj3622/mist-forum",
            ),
            project(
                "校园外卖系统",
                "基于SpringBoot的校园外卖系统，有微信小程序的用户端和商家管理的Web端，实现了用户注册、登录、下单、支付等功能",
                "poj5.png",
                "https://github.com/mj3622/Sky-Takeout",
            ),
            project(
                "DigitalClock",
                "基于Nexys4 DDR开发板的Verilog实现的数字钟项目，数字钟可以实现计时、闹钟等功能",
                "poj6.png",
                "https://github.com/mj3622/DIgitalClock_Design",
            ),
        ],
        page6: Contact {
            github: "https://github.com/mj3622".to_string(),
            email: "Mailto:minjer@foxmail.com?Subject=邮箱标题&Body=邮箱内容！".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Section;

    #[test]
    fn test_scenario_reads() {
        let p = portfolio();
        assert_eq!(p.page1().title, "永远在路上");
        assert_eq!(p.page5()[0].title, "Emoprobe情感分析系统");
        assert_eq!(p.page4().progress_list().len(), 6);
    }

    #[test]
    fn test_exact_top_level_keys() {
        let value = serde_json::to_value(portfolio()).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        let mut expected: Vec<_> = Section::ALL.iter().map(|s| s.key().to_string()).collect();
        expected.sort();
        let mut keys = keys;
        keys.sort();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_display_order() {
        let p = portfolio();
        let titles: Vec<_> = p.page3().iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["开发语言", "数据库", "框架/中间件", "其余技能"]);
        let bars: Vec<_> = p
            .page4()
            .progress_list()
            .iter()
            .map(|b| (b.title.as_str(), b.percent()))
            .collect();
        assert_eq!(
            bars,
            [
                ("Java", Some(90)),
                ("SpringBoot", Some(80)),
                ("MySQL", Some(80)),
                ("Redis", Some(60)),
                ("RabbitMQ", Some(60)),
                ("Mybatis", Some(70)),
            ]
        );
    }

    #[test]
    fn test_record_fields_present() {
        let value = serde_json::to_value(portfolio()).unwrap();
        for group in value["page3"].as_array().unwrap() {
            for key in ["icon", "title", "msg"] {
                assert!(group.get(key).is_some(), "page3 record missing {key}");
            }
        }
        for project in value["page5"].as_array().unwrap() {
            for key in ["title", "content", "image", "href"] {
                assert!(project[key].is_string(), "page5 record missing {key}");
            }
        }
    }

    #[test]
    fn test_contact_mailto() {
        let mail = portfolio().page6().mailto().unwrap();
        assert_eq!(mail.address, "minjer@foxmail.com");
        assert_eq!(mail.subject.as_deref(), Some("邮箱标题"));
    }

    #[test]
    fn test_section_view() {
        let page1 = portfolio().section(Section::Page1).unwrap();
        assert_eq!(page1["titleEn"], "Hello,I`m Minjer");
        let page4 = portfolio().section(Section::Page4).unwrap();
        assert_eq!(page4["course"][0]["desc"]["title"], "华中科技大学");
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| portfolio().page5().len()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 6);
        }
    }
}
