use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Consultor,
    Gerente,
    Director,
    Admin,
}

impl Role {
    pub fn can_process_entries(&self) -> bool {
        matches!(self, Role::Gerente | Role::Director | Role::Admin)
    }

    pub fn can_provision_users(&self) -> bool {
        matches!(self, Role::Director | Role::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Activo,
    Pausado,
    Finalizado,
}

/// Engagement category used by the cross-cutting distribution reports.
/// Variant order is the display order; rows without a work front are shown
/// under `Otro`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WorkFront {
    Procesos,
    #[serde(rename = "SAP IBP")]
    SapIbp,
    #[serde(rename = "SAP MDG")]
    SapMdg,
    Otro,
}

impl WorkFront {
    pub fn label(&self) -> &'static str {
        match self {
            WorkFront::Procesos => "Procesos",
            WorkFront::SapIbp => "SAP IBP",
            WorkFront::SapMdg => "SAP MDG",
            WorkFront::Otro => "Otro",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub nombre: String,
    pub codigo: String,
    pub client_id: String,
    pub manager_id: Option<String>,
    pub system_id: Option<String>,
    pub work_front: Option<WorkFront>,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub nombre: String,
    pub codigo: String,
    pub pais: String,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub id: String,
    pub nombre: String,
    pub codigo: String,
    pub descripcion: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub role: Role,
    pub permissions: Vec<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}
