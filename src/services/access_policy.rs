//! Política de acceso por rol
//!
//! La tabla rol → módulo → acciones se inyecta en los servicios como una
//! capability (`Arc<dyn AccessPolicy>`), de modo que pueda reemplazarse por
//! deployment o en tests en lugar de vivir como constante global.

use crate::models::auth::UserRole;
use crate::utils::errors::AppError;

pub trait AccessPolicy: Send + Sync {
    /// Verifica si un rol tiene permitida una acción sobre un módulo
    fn has_permission(&self, role: UserRole, module: &str, action: &str) -> bool;

    /// Variante que falla con PermissionDenied en lugar de devolver bool
    fn require(&self, role: UserRole, module: &str, action: &str) -> Result<(), AppError> {
        if self.has_permission(role, module, action) {
            Ok(())
        } else {
            Err(AppError::PermissionDenied(format!(
                "Role '{}' cannot perform '{}' on '{}'",
                role.as_str(),
                action,
                module
            )))
        }
    }
}

/// Tabla de permisos estática del sistema
#[derive(Debug, Default, Clone)]
pub struct StaticAccessPolicy;

impl StaticAccessPolicy {
    pub fn new() -> Self {
        Self
    }

    fn actions_for(role: UserRole, module: &str) -> &'static [&'static str] {
        match (role, module) {
            // Director - acceso y control total
            (UserRole::Director, "clients") => &["view", "create", "edit", "delete", "suspend"],
            (UserRole::Director, "vehicles") => &["view", "create", "edit", "delete", "maintenance"],
            (UserRole::Director, "bookings") => &["view", "create", "edit", "cancel", "delete"],

            // Staff - tareas operativas y gestión de clientes
            (UserRole::Staff, "clients") => &["view", "create", "edit", "suspend"],
            (UserRole::Staff, "vehicles") => &["view", "edit", "maintenance"],
            (UserRole::Staff, "bookings") => &["view", "create", "edit"],

            // Owner - solo lectura sobre su flota y sus bookings
            (UserRole::Owner, "vehicles") => &["view"],
            (UserRole::Owner, "bookings") => &["view"],

            // Client - autoservicio
            (UserRole::Client, "vehicles") => &["view"],
            (UserRole::Client, "bookings") => &["view", "create"],

            _ => &[],
        }
    }
}

impl AccessPolicy for StaticAccessPolicy {
    fn has_permission(&self, role: UserRole, module: &str, action: &str) -> bool {
        Self::actions_for(role, module).contains(&action)
    }
}
