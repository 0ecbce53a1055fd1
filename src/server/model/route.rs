use crate::{
    model::route::{CreateRouteDto, PatchRouteDto, RouteDetailDto, RouteDto, RouteListDto},
    server::model::airport::{AirportDetail, AirportListItem},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: i32,
    pub source_id: i32,
    pub destination_id: i32,
    pub distance: i32,
}

impl Route {
    pub fn from_entity(entity: entity::route::Model) -> Self {
        Self {
            id: entity.id,
            source_id: entity.source_id,
            destination_id: entity.destination_id,
            distance: entity.distance,
        }
    }

    pub fn into_dto(self) -> RouteDto {
        RouteDto {
            id: self.id,
            source: self.source_id,
            destination: self.destination_id,
            distance: self.distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteListItem {
    pub id: i32,
    pub source: AirportListItem,
    pub destination: AirportListItem,
    pub distance: i32,
}

impl RouteListItem {
    pub fn into_dto(self) -> RouteListDto {
        RouteListDto {
            id: self.id,
            source: self.source.into_dto(),
            destination: self.destination.into_dto(),
            distance: self.distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteDetail {
    pub id: i32,
    pub source: AirportDetail,
    pub destination: AirportDetail,
    pub distance: i32,
}

impl RouteDetail {
    pub fn into_dto(self) -> RouteDetailDto {
        RouteDetailDto {
            id: self.id,
            source: self.source.into_dto(),
            destination: self.destination.into_dto(),
            distance: self.distance,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRouteParams {
    pub source_id: i32,
    pub destination_id: i32,
    pub distance: i32,
}

impl CreateRouteParams {
    pub fn from_dto(dto: CreateRouteDto) -> Self {
        Self {
            source_id: dto.source,
            destination_id: dto.destination,
            distance: dto.distance,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRouteParams {
    pub source_id: Option<i32>,
    pub destination_id: Option<i32>,
    pub distance: Option<i32>,
}

impl UpdateRouteParams {
    pub fn from_put(dto: CreateRouteDto) -> Self {
        Self {
            source_id: Some(dto.source),
            destination_id: Some(dto.destination),
            distance: Some(dto.distance),
        }
    }

    pub fn from_patch(dto: PatchRouteDto) -> Self {
        Self {
            source_id: dto.source,
            destination_id: dto.destination,
            distance: dto.distance,
        }
    }
}

/// Filters shared by route and flight listings. Every field is an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointFilter {
    pub source_city: Option<i32>,
    pub destination_city: Option<i32>,
    pub source_airport: Option<i32>,
    pub destination_airport: Option<i32>,
    pub source_country: Option<i32>,
    pub destination_country: Option<i32>,
}

impl EndpointFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    pub search: Option<String>,
    pub endpoints: EndpointFilter,
}
