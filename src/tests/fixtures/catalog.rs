use crate::modules::tracking::core::catalog::{
    Client, Project, ProjectStatus, Role, System, UserProfile,
};

pub fn make_profile(id: &str, nombre: &str, apellido: &str, role: Role) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        nombre: nombre.to_string(),
        apellido: apellido.to_string(),
        email: format!("{id}@example.com"),
        role,
        permissions: Vec::new(),
    }
}

pub fn project_for_manager(
    id: &str,
    nombre: &str,
    manager_id: &str,
    status: ProjectStatus,
) -> Project {
    Project {
        id: id.to_string(),
        nombre: nombre.to_string(),
        codigo: id.to_uppercase(),
        client_id: "c-0001".to_string(),
        manager_id: Some(manager_id.to_string()),
        system_id: None,
        work_front: None,
        status,
    }
}

pub fn make_client(id: &str, nombre: &str) -> Client {
    Client {
        id: id.to_string(),
        nombre: nombre.to_string(),
        codigo: id.to_uppercase(),
        pais: "Perú".to_string(),
        activo: true,
    }
}

pub fn make_system(id: &str, nombre: &str) -> System {
    System {
        id: id.to_string(),
        nombre: nombre.to_string(),
        codigo: id.to_uppercase(),
        descripcion: None,
        activo: true,
    }
}
