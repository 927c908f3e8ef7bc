use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RsvpSubmitted {
    pub wedding_id: Uuid,
    pub rsvp_id: Uuid,
    pub attending: bool,
    pub party_size: i32,
}
