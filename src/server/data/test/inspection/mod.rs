use crate::server::{
    data::inspection::InspectionRepository,
    model::{
        inspection::ValidInspection,
        room::{Room, Surface},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;

mod create;
