use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::scroll::Section;

pub static SECTIONS: &[Section] = &[
    Section {
        id: "intro",
        label: "INTRO",
    },
    Section {
        id: "skills",
        label: "SKILLS",
    },
    Section {
        id: "problem",
        label: "PROBLEM SOLVING",
    },
    Section {
        id: "projects",
        label: "PROJECTS",
    },
    Section {
        id: "contact",
        label: "CONTACT",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub section_id: &'static str,
    pub label: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        section_id: "skills",
        label: "기술 스택",
    },
    NavItem {
        section_id: "problem",
        label: "역량 및 문제해결",
    },
    NavItem {
        section_id: "projects",
        label: "프로젝트",
    },
    NavItem {
        section_id: "contact",
        label: "추가 정보",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: Option<SkillLevel>,
    pub category: Option<&'static str>,
}

pub static CORE_SKILLS: &[Skill] = &[
    Skill {
        name: "React",
        level: Some(SkillLevel::Advanced),
        category: Some("Frontend"),
    },
    Skill {
        name: "TypeScript",
        level: Some(SkillLevel::Advanced),
        category: Some("Frontend"),
    },
    Skill {
        name: "Tailwind CSS",
        level: Some(SkillLevel::Intermediate),
        category: Some("UI"),
    },
];

pub static OTHER_SKILLS: &[Skill] = &[
    Skill {
        name: "Git / GitHub",
        level: None,
        category: Some("Collaboration"),
    },
    Skill {
        name: "REST API 연동",
        level: None,
        category: Some("Backend"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
    pub tags: &'static [&'static str],
}

pub static CAPABILITIES: &[Capability] = &[
    Capability {
        title: "컴포넌트 구조 설계",
        summary: "화면을 책임 단위로 나누고\n재사용 가능한 컴포넌트로 구성합니다.",
        points: &[
            "섹션/모달/공통 UI를 분리해 변경 범위를 좁혔습니다.",
            "props 타입을 먼저 정의하고 구현해 수정 시 안정성을 확보했습니다.",
        ],
        tags: &["React", "TypeScript", "Component Design"],
    },
    Capability {
        title: "서버 상태 관리",
        summary: "서버 데이터와 UI 상태를 구분해\n불필요한 요청과 렌더링을 줄입니다.",
        points: &[
            "React Query 캐싱으로 중복 요청을 제거했습니다.",
            "낙관적 업데이트로 체감 응답 속도를 개선했습니다.",
        ],
        tags: &["React Query", "Caching", "REST API"],
    },
    Capability {
        title: "배포 및 운영",
        summary: "빌드부터 배포까지 직접 구성하고\n운영 환경의 문제를 추적합니다.",
        points: &[
            "Docker + Jenkins로 빌드/배포 파이프라인을 구성했습니다.",
            "Nginx 설정으로 SPA 라우팅과 캐시 정책을 관리했습니다.",
        ],
        tags: &["Docker", "Jenkins", "Nginx", "AWS", "Vercel"],
    },
    Capability {
        title: "인터랙션과 성능",
        summary: "부드러운 인터랙션을 유지하면서\n렌더링 비용을 관리합니다.",
        points: &[
            "스크롤 이벤트를 프레임 단위로 묶어 처리했습니다.",
            "코드 스플리팅과 이미지 지연 로딩으로 초기 로딩을 줄였습니다.",
        ],
        tags: &["Performance", "Animation", "UX"],
    },
];

/// Row label in an experience case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseLabel {
    Problem,
    Solution,
    Outcome,
    Lesson,
}

impl CaseLabel {
    pub fn text(&self) -> &'static str {
        match self {
            CaseLabel::Problem => "문제",
            CaseLabel::Solution => "해결",
            CaseLabel::Outcome => "성과",
            CaseLabel::Lesson => "배운점",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            CaseLabel::Problem => "bg-rose-500/10 text-rose-200 border-rose-500/20",
            CaseLabel::Solution => "bg-teal-500/10 text-teal-200 border-teal-500/20",
            CaseLabel::Outcome => "bg-indigo-500/10 text-indigo-200 border-indigo-500/20",
            CaseLabel::Lesson => "bg-amber-500/10 text-amber-200 border-amber-500/20",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceCase {
    pub title: &'static str,
    pub project: Option<&'static str>,
    pub items: &'static [(CaseLabel, &'static str)],
}

pub static EXPERIENCE_CASES: &[ExperienceCase] = &[
    ExperienceCase {
        title: "일정 알림이 중복 발송되는 문제",
        project: Some("PETORY"),
        items: &[
            (
                CaseLabel::Problem,
                "반복 일정 수정 시 알림 예약이 누적되어 같은 알림이 여러 번 발송되었습니다.",
            ),
            (
                CaseLabel::Solution,
                "일정 단위로 알림 키를 정의하고, 수정 시 기존 예약을 먼저 해제한 뒤 재등록하도록 흐름을 바꿨습니다.",
            ),
            (CaseLabel::Outcome, "중복 알림 문의가 사라졌습니다."),
            (
                CaseLabel::Lesson,
                "상태를 바꾸는 작업은 이전 상태의 정리까지 포함해야 완결된다는 것을 배웠습니다.",
            ),
        ],
    },
    ExperienceCase {
        title: "스크롤 위치에 따라 네비게이션이 깜빡이는 문제",
        project: Some("Portfolio"),
        items: &[
            (
                CaseLabel::Problem,
                "섹션 경계 근처에서 활성 메뉴가 빠르게 번갈아 바뀌었습니다.",
            ),
            (
                CaseLabel::Solution,
                "기준점을 화면 상단 쪽으로 옮기고, 직전 섹션 경계에 완충 구간을 두었습니다.\n섹션 위치는 리사이즈와 초기 로딩 직후에만 다시 측정합니다.",
            ),
            (CaseLabel::Outcome, "빠르게 스크롤해도 활성 메뉴가 안정적으로 유지됩니다."),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Ready,
    Wip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub repo: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub people: &'static str,
    pub tech_stack: &'static [&'static str],
    pub summary: &'static str,
    pub role: &'static str,
    pub image: Option<&'static str>,
    pub status: ProjectStatus,
    pub links: ProjectLinks,
    pub pdf_url: Option<&'static str>,
    pub detail_images: &'static [&'static str],
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "petory",
        title: "PETORY - 반려동물 일정/공유돌봄 플랫폼",
        period: "2024.01 ~ 2024.09",
        people: "Frontend 2 · Backend 2",
        tech_stack: &[
            "React",
            "JavaScript",
            "React Query",
            "CSS",
            "Nginx",
            "Docker",
            "Jenkins",
            "AWS",
        ],
        summary: "반려동물 일정 관리, 공유 돌봄, 커뮤니티 기능을 제공하는 웹 서비스.",
        role: "프론트엔드 개발\nUI/UX 설계, React 구조 설계, 배포 파이프라인 구성",
        image: Some("/images/petory-logo.png"),
        status: ProjectStatus::Ready,
        links: ProjectLinks {
            demo: Some("https://petory.site"),
            repo: None,
        },
        pdf_url: Some("/pdf/petory.pdf"),
        detail_images: &[],
    },
    Project {
        id: "portfolio",
        title: "Portfolio - 개인 포트폴리오 웹사이트",
        period: "2025.12",
        people: "개인 프로젝트",
        tech_stack: &["React", "TypeScript", "Tailwind CSS", "Vercel"],
        summary: "경험과 역량을 한 페이지에서 전달하는 개인 포트폴리오.",
        role: "기획, 디자인, 개발, 배포 전 과정",
        image: Some("/images/portfolio-logo.png"),
        status: ProjectStatus::Ready,
        links: ProjectLinks {
            demo: None,
            repo: Some("https://github.com/wlgns5041/portfolio"),
        },
        pdf_url: None,
        detail_images: &[
            "/images/portfolio/main.png",
            "/images/portfolio/skills.png",
            "/images/portfolio/problem.png",
            "/images/portfolio/projects.png",
            "/images/portfolio/modal.png",
        ],
    },
    Project {
        id: "next",
        title: "새 프로젝트",
        period: "2026 ~",
        people: "Frontend 1",
        tech_stack: &["TypeScript"],
        summary: "준비 중인 프로젝트입니다.",
        role: "",
        image: None,
        status: ProjectStatus::Wip,
        links: ProjectLinks {
            demo: None,
            repo: None,
        },
        pdf_url: None,
        detail_images: &[],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectIssue {
    pub problem: &'static str,
    pub solution: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub intro: Option<&'static str>,
    pub status_label: Option<&'static str>,
    pub duration: Option<&'static str>,
    pub team: Option<&'static str>,
    pub contribution: &'static [&'static str],
    pub features: &'static [&'static str],
    pub tech_reasons: Option<&'static str>,
    pub issues: &'static [ProjectIssue],
    pub takeaway: Option<&'static str>,
    pub highlights: &'static [&'static str],
}

impl ProjectDetail {
    pub fn has_meta(&self) -> bool {
        self.duration.is_some() || self.team.is_some() || !self.contribution.is_empty()
    }
}

static PROJECT_DETAILS: &[(&str, ProjectDetail)] = &[(
    "portfolio",
    ProjectDetail {
        status_label: Some("서비스 중"),
        duration: Some("2025.12"),
        team: Some("개인 프로젝트"),
        contribution: &["개발 100%", "디자인 100%", "기획 100%"],
        intro: Some(
            "TypeScript + React + Tailwind CSS로 개발한 웹 기반 개인 포트폴리오입니다.\n프로젝트 경험과 개발 역량을 한눈에 전달하는 것을 목표로, 컴포넌트 구조를 분리하고 타입 안정성을 강화했습니다.",
        ),
        features: &[
            "섹션 기반 구성(소개/스킬/경험/프로젝트/연락처) 및 스크롤 네비게이션",
            "프로젝트 상세 모달(PDF / 이미지 갤러리) 제공",
            "반응형 레이아웃 및 인터랙션 애니메이션",
            "배포 자동화/운영 환경 구성(Vercel)",
        ],
        tech_reasons: Some(
            "TypeScript는 컴포넌트 props/상태의 타입 안전성을 확보하고 유지보수성을 높이기 위해 도입했습니다.\nTailwind CSS는 유틸리티 기반 스타일로 UI 일관성을 빠르게 맞추고 컴포넌트 단위로 확장하기에 적합해 선택했습니다.",
        ),
        issues: &[
            ProjectIssue {
                problem: "섹션이 많아질수록 스크롤 이벤트/렌더링 처리로 체감 성능 저하",
                solution: "스크롤 처리를 프레임당 1회로 묶고, 섹션 위치 측정은 리사이즈와 초기 로딩 직후로 한정해 불필요한 레이아웃 계산을 줄였습니다.",
            },
            ProjectIssue {
                problem: "초기 로딩 리소스가 커지며 첫 화면 진입 비용 증가",
                solution: "코드 스플리팅과 이미지 지연 로딩으로 초기 번들 비용을 줄여 체감 로딩 개선",
            },
        ],
        takeaway: Some(
            "포트폴리오를 제품처럼 다듬는 과정에서 보여주는 UI뿐 아니라\n성능/구조/운영(배포)까지 함께 고려하는 습관을 만들었습니다.",
        ),
        highlights: &[
            "타입 기반 설계로 컴포넌트 안정성 강화",
            "코드 스플리팅/지연 로딩으로 초기 로딩 개선",
            "프레임 단위 스크롤 처리로 네비게이션 안정화",
        ],
    },
)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactKind {
    Github,
    Blog,
    Email,
    Phone,
    Etc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: ContactKind,
}

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "GitHub",
        href: "https://github.com/wlgns5041",
        kind: ContactKind::Github,
    },
    ContactLink {
        label: "개발 블로그",
        href: "https://velog.io/@wlgns5041/posts",
        kind: ContactKind::Blog,
    },
];

pub const OWNER: &str = "Jihoon Kim";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectError {
    #[error("Project {0} is still in progress")]
    InProgress(&'static str),
    #[error("Project not found: {0}")]
    NotFound(String),
}

/// What clicking a project card opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectView {
    Pdf {
        project: &'static Project,
        url: &'static str,
    },
    Detail {
        project: &'static Project,
        detail: Option<&'static ProjectDetail>,
    },
}

impl Project {
    pub fn is_wip(&self) -> bool {
        self.status == ProjectStatus::Wip
    }

    pub fn detail(&self) -> Option<&'static ProjectDetail> {
        project_detail(self.id)
    }

    pub fn open(&'static self) -> Result<ProjectView, ProjectError> {
        if self.is_wip() {
            return Err(ProjectError::InProgress(self.id));
        }
        Ok(match self.pdf_url {
            Some(url) => ProjectView::Pdf { project: self, url },
            None => ProjectView::Detail {
                project: self,
                detail: self.detail(),
            },
        })
    }
}

pub fn project(id: &str) -> Result<&'static Project, ProjectError> {
    PROJECTS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ProjectError::NotFound(id.to_string()))
}

pub fn project_detail(id: &str) -> Option<&'static ProjectDetail> {
    PROJECT_DETAILS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, detail)| detail)
}

const EMPHASIZED: [&str; 2] = ["Frontend 1", "개인 프로젝트"];

/// Piece of the people line; `true` when the piece is emphasized.
pub type Segment<'a> = (bool, &'a str);

/// Splits `text` around the emphasized team phrases.
pub fn emphasize(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let next = EMPHASIZED
            .iter()
            .filter_map(|phrase| rest.find(phrase).map(|at| (at, *phrase)))
            .min_by_key(|(at, _)| *at);
        let Some((at, phrase)) = next else {
            out.push((false, rest));
            break;
        };
        if at > 0 {
            out.push((false, &rest[..at]));
        }
        out.push((true, &rest[at..at + phrase.len()]));
        rest = &rest[at + phrase.len()..];
    }
    out
}

static TECH_LOGOS: &[(&str, &str)] = &[
    ("JavaScript", "/logos/javascript.png"),
    ("TypeScript", "/logos/typescript.png"),
    ("React", "/logos/react.png"),
    ("React Query", "/logos/reactquery.png"),
    ("Tailwind CSS", "/logos/tailwind.png"),
    ("CSS", "/logos/css.png"),
    ("Nginx", "/logos/nginx.png"),
    ("Docker", "/logos/docker.png"),
    ("Jenkins", "/logos/jenkins.png"),
    ("AWS", "/logos/aws.png"),
    ("Vercel", "/logos/vercel.png"),
];

pub fn tech_logo(tech: &str) -> Option<&'static str> {
    TECH_LOGOS
        .iter()
        .find(|(name, _)| *name == tech)
        .map(|(_, src)| *src)
}

/// Badge text for techs without a logo.
pub fn tech_initials(tech: &str) -> String {
    tech.chars().take(2).collect::<String>().to_uppercase()
}

pub const MAX_THUMBNAILS: usize = 7;

/// Selected gallery image per project, kept across modal openings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    active: HashMap<&'static str, usize>,
}

impl GalleryState {
    pub fn active_index(&self, project: &Project) -> usize {
        self.active.get(project.id).copied().unwrap_or_default()
    }

    pub fn active_image(&self, project: &Project) -> Option<&'static str> {
        project.detail_images.get(self.active_index(project)).copied()
    }

    /// Selects image `index`, clamped to the thumbnails actually shown.
    pub fn select(&mut self, project: &'static Project, index: usize) {
        let shown = project.detail_images.len().min(MAX_THUMBNAILS);
        if shown == 0 {
            return;
        }
        self.active.insert(project.id, index.min(shown - 1));
    }

    pub fn thumbnails(project: &Project) -> &'static [&'static str] {
        let shown = project.detail_images.len().min(MAX_THUMBNAILS);
        &project.detail_images[..shown]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_are_sections() {
        for item in NAV_ITEMS {
            assert!(
                SECTIONS.iter().any(|s| s.id == item.section_id),
                "{} has no section",
                item.section_id
            );
        }
        // intro has no nav item
        assert!(!NAV_ITEMS.iter().any(|i| i.section_id == "intro"));
    }

    #[test]
    fn test_section_ids_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_open_project() {
        let petory = project("petory").unwrap();
        assert!(matches!(
            petory.open(),
            Ok(ProjectView::Pdf {
                url: "/pdf/petory.pdf",
                ..
            })
        ));

        let portfolio = project("portfolio").unwrap();
        match portfolio.open() {
            Ok(ProjectView::Detail { project, detail }) => {
                assert_eq!(project.id, "portfolio");
                assert_eq!(detail.and_then(|d| d.duration), Some("2025.12"));
            }
            other => panic!("unexpected {other:?}"),
        }

        let next = project("next").unwrap();
        assert_eq!(next.open(), Err(ProjectError::InProgress("next")));

        assert_eq!(
            project("missing").unwrap_err(),
            ProjectError::NotFound("missing".to_string())
        );
    }

    #[test]
    fn test_emphasize() {
        assert_eq!(
            emphasize("Frontend 1 · Backend 2"),
            vec![(true, "Frontend 1"), (false, " · Backend 2")]
        );
        assert_eq!(emphasize("개인 프로젝트"), vec![(true, "개인 프로젝트")]);
        assert_eq!(
            emphasize("Backend 1 · Frontend 1 · 개인 프로젝트!"),
            vec![
                (false, "Backend 1 · "),
                (true, "Frontend 1"),
                (false, " · "),
                (true, "개인 프로젝트"),
                (false, "!"),
            ]
        );
        assert_eq!(emphasize("Frontend 2"), vec![(false, "Frontend 2")]);
        assert!(emphasize("").is_empty());
    }

    #[test]
    fn test_tech_badges() {
        assert_eq!(tech_logo("React"), Some("/logos/react.png"));
        assert_eq!(tech_logo("Spring Boot"), None);
        assert_eq!(tech_initials("Spring Boot"), "SP");
        assert_eq!(tech_initials("연동"), "연동");
        assert_eq!(tech_initials("x"), "X");
    }

    #[test]
    fn test_gallery_state_per_project() {
        let portfolio = project("portfolio").unwrap();
        let petory = project("petory").unwrap();
        let mut gallery = GalleryState::default();

        assert_eq!(gallery.active_index(portfolio), 0);
        assert_eq!(gallery.active_image(portfolio), Some("/images/portfolio/main.png"));

        gallery.select(portfolio, 2);
        assert_eq!(gallery.active_index(portfolio), 2);
        assert_eq!(gallery.active_image(portfolio), Some("/images/portfolio/problem.png"));

        // out of range clamps to the last thumbnail
        gallery.select(portfolio, 40);
        assert_eq!(gallery.active_index(portfolio), 4);

        // projects without images are unaffected
        gallery.select(petory, 3);
        assert_eq!(gallery.active_index(petory), 0);
        assert_eq!(gallery.active_image(petory), None);
    }

    #[test]
    fn test_thumbnails_capped() {
        for p in PROJECTS {
            assert!(GalleryState::thumbnails(p).len() <= MAX_THUMBNAILS);
        }
    }

    #[test]
    fn test_detail_meta() {
        assert!(project_detail("portfolio").unwrap().has_meta());
        assert!(!ProjectDetail::default().has_meta());
        assert!(project_detail("petory").is_none());
    }
}
