#![allow(dead_code)]

use std::sync::Arc;
use vitae_core::{Certification, Experience, Project, SearchConfig, VolunteerEntry};
use vitae_search::SearchService;
use vitae_store::MemoryStore;

pub fn project(id: &str, name: &str, description: &str, skills: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        project_name: name.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

pub fn certification(id: &str, title: &str, issuer: &str, skills: &[&str]) -> Certification {
    Certification {
        id: id.to_string(),
        title: title.to_string(),
        issuer: issuer.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

pub fn experience(id: &str, company: &str, description: &str, tech: &[&str]) -> Experience {
    Experience {
        id: id.to_string(),
        company_name: company.to_string(),
        description: description.to_string(),
        technologies: tech.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

pub fn volunteer(id: &str, organisation: &str, description: &str, tech: &[&str]) -> VolunteerEntry {
    VolunteerEntry {
        id: id.to_string(),
        organisation: organisation.to_string(),
        description: description.to_string(),
        technologies: tech.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// Store and service wired so mutations invalidate the index
pub fn wired(store: MemoryStore) -> (Arc<MemoryStore>, Arc<SearchService<MemoryStore>>) {
    let store = Arc::new(store);
    let service = Arc::new(SearchService::new(Arc::clone(&store), SearchConfig::new()));
    store.subscribe(&service);
    (store, service)
}

pub fn sample_store() -> MemoryStore {
    let store = MemoryStore::new();
    store
        .create(project(
            "p1",
            "Realtime Chat System",
            "Scalable chat backend with presence and typing indicators",
            &["Go", "WebSockets"],
        ))
        .unwrap();
    store
        .create(project(
            "p2",
            "Portfolio Backend",
            "REST API serving projects, experiences and certifications",
            &["Go", "MongoDB", "Fiber"],
        ))
        .unwrap();
    store
        .create(experience(
            "e1",
            "Acme Cloud",
            "Worked on Kubernetes operators and chat tooling",
            &["Kubernetes", "Go"],
        ))
        .unwrap();
    store
        .create(certification(
            "c1",
            "Certified Kubernetes Administrator",
            "CNCF",
            &["Kubernetes"],
        ))
        .unwrap();
    store
        .create(volunteer(
            "v1",
            "Open Source Society",
            "Mentored students on Rust and Go",
            &["Rust"],
        ))
        .unwrap();
    store
}
