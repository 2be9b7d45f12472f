use crate::modules::tracking::core::catalog::Role;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUser {
    /// Authenticated caller; must hold the `admin` or `director` role.
    pub requested_by: String,
    pub email: String,
    pub password: String,
    pub nombre: String,
    pub apellido: String,
    pub role: Role,
    pub activo: bool,
}
