//! One thin client per backend resource, mirroring the REST surface.

mod comentarios;
mod demandas;
mod enderecos;
mod materiais;
mod solicitacoes;
mod usuarios;

pub use comentarios::ComentariosService;
pub use demandas::DemandasService;
pub use enderecos::EnderecosService;
pub use materiais::MateriaisService;
pub use solicitacoes::SolicitacoesService;
pub use usuarios::{UsuariosService, LOGOUT_PATH};
