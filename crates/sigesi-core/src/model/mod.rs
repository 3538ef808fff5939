//! Domain models for the SIGESI backend.
//!
//! All types mirror the backend's JSON wire format: camelCase field names and
//! SCREAMING_SNAKE_CASE enum values. Timestamps are kept as the ISO strings
//! the backend emits.

mod comentario;
mod demanda;
mod endereco;
mod material;
mod solicitacao;
mod usuario;

pub use comentario::{Comentario, NovoComentario};
pub use demanda::{AtualizacaoDemanda, Demanda, NovaDemanda, PrioridadeDemanda, StatusDemanda};
pub use endereco::{Endereco, NovoEndereco};
pub use material::Material;
pub use solicitacao::{
    AtualizacaoSolicitacao, NovaSolicitacao, Solicitacao, StatusSolicitacao, TipoSolicitacao,
};
pub use usuario::{PerfilUsuario, Usuario};
