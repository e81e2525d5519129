//! Sample portfolio content.

use super::{Project, TechSkill};

const SKILLS: &[(&str, &str)] = &[
    ("React", "/react.svg"),
    ("Next.js", "/nextjs.svg"),
    ("JavaScript", "/javascript.svg"),
    ("Typescript", "/typescript.svg"),
    ("Nodejs", "/nodejs.svg"),
    ("Express", "/express-js.svg"),
    ("Tailwind", "/tailwind.svg"),
    ("Material UI", "/material-ui.svg"),
    ("Ant Design", "/antd.svg"),
    ("HTML", "/html.svg"),
    ("CSS", "/css.svg"),
    ("SASS", "/sass.svg"),
    ("MongoDB", "/mongodb.svg"),
    ("Docker", "/docker.svg"),
    ("Postman", "/postman.svg"),
    ("Figma", "/figma.svg"),
];

pub fn skills() -> Vec<TechSkill> {
    SKILLS
        .iter()
        .map(|&(name, image)| TechSkill::new(name, image))
        .collect()
}

pub fn projects() -> Vec<Project> {
    let project = |title: &str, description: &str, tags: &[&str]| Project {
        title: title.into(),
        description: description.into(),
        tags: tags.iter().map(|&t| t.into()).collect(),
        image: "/project-01.png".into(),
        url: None,
    };

    vec![
        project(
            "E-commerce Platform",
            "A full-stack online shopping solution with advanced features like real-time \
             inventory management, personalized recommendations, and seamless payment integration.",
            &["React", "Node.js", "MongoDB", "Redux", "Stripe"],
        ),
        project(
            "Task Management App",
            "Productivity tool with real-time updates, collaborative features, and intuitive UI \
             for efficient task organization and team coordination.",
            &["Vue.js", "Firebase", "Vuex"],
        ),
        project(
            "Portfolio Website",
            "Responsive showcase for creative professionals with dynamic content loading, smooth \
             animations, and optimized performance.",
            &["Next.js", "Tailwind CSS", "Framer Motion"],
        ),
    ]
}

pub fn about_paragraphs() -> Vec<String> {
    vec![
        "I'm Software Engineer with 2 years of experience in Web Development. I have 1.5 years \
         of React-related technologies. With my knowledge of UI/UX design, i enjoy solving \
         front-end problems and creating the best user experience for uses. I also spend time \
         learning new technologies and best practices to become a better engineer."
            .into(),
        "When I'm not coding, you can find me exploring new technologies, contributing to \
         open-source projects, or sharing my knowledge through tech blogs and community meetups."
            .into(),
    ]
}
