use super::ViewState;
use crate::api::ApiClient;
use crate::models::{Order, OrderStatusUpdate};

const ORDER_FAILED: &str = "Could not update the order.";

/// Which orders the page lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScope {
    /// The signed-in user's own orders.
    Mine,
    /// Every order in the shop, for admins.
    All,
}

pub struct OrdersController {
    api: ApiClient,
    scope: OrderScope,
    pub orders: Vec<Order>,
    pub view: ViewState,
}

impl OrdersController {
    pub fn new(api: ApiClient, scope: OrderScope) -> Self {
        Self {
            api,
            scope,
            orders: Vec::new(),
            view: ViewState::default(),
        }
    }

    pub fn scope(&self) -> OrderScope {
        self.scope
    }

    pub async fn load(&mut self) {
        self.view.start();
        let orders = self.api.orders();
        let result = match self.scope {
            OrderScope::Mine => orders.list_mine().await,
            OrderScope::All => orders.list_all().await,
        };
        self.view.finish();
        match result {
            Ok(orders) => self.orders = orders,
            Err(e) => self.view.fail("Order load failed", &e, "Could not load orders."),
        }
    }

    /// Flips an order's `done` flag. Only admins see this action; for anyone else
    /// it is a no-op.
    pub async fn toggle_done(&mut self, order_id: &str) {
        let is_admin = self
            .api
            .session()
            .auth_data()
            .is_some_and(|auth| auth.claims.is_admin());
        if !is_admin {
            return;
        }
        let Some(order) = self.orders.iter().find(|o| o.id == order_id) else {
            return;
        };
        let update = OrderStatusUpdate { done: !order.done };

        self.view.start();
        let result = self.api.orders().update(order_id, &update).await;
        self.view.finish();
        match result {
            Ok(()) => self.load().await,
            Err(e) => self.view.fail("Order status update failed", &e, ORDER_FAILED),
        }
    }

    pub async fn delete(&mut self, order_id: &str) {
        self.view.start();
        let result = self.api.orders().delete(order_id).await;
        self.view.finish();
        match result {
            Ok(()) => self.load().await,
            Err(e) => self.view.fail("Order deletion failed", &e, ORDER_FAILED),
        }
    }
}
